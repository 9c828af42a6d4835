use super::*;

#[test]
fn display_includes_context() {
    assert_eq!(AppError::UnknownGame("tetris".into()).to_string(), "unknown game id: tetris");
    assert_eq!(AppError::Render("bad embed".into()).to_string(), "render failed: bad embed");
}
