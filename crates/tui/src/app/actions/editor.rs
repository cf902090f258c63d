//! Editor actions for the `editor-*` logical events.

use crate::app::App;

pub fn kill_to_eol(app: &mut App) -> anyhow::Result<()> {
    app.editor.kill_to_eol();
    Ok(())
}

pub fn kill_to_bol(app: &mut App) -> anyhow::Result<()> {
    app.editor.kill_to_bol();
    Ok(())
}

pub fn bol(app: &mut App) -> anyhow::Result<()> {
    app.editor.bol();
    Ok(())
}

pub fn eol(app: &mut App) -> anyhow::Result<()> {
    app.editor.eol();
    Ok(())
}

pub fn prev_char(app: &mut App) -> anyhow::Result<()> {
    app.editor.prev_char();
    Ok(())
}

pub fn next_char(app: &mut App) -> anyhow::Result<()> {
    app.editor.next_char();
    Ok(())
}

pub fn prev_word(app: &mut App) -> anyhow::Result<()> {
    app.editor.prev_word();
    Ok(())
}

pub fn next_word(app: &mut App) -> anyhow::Result<()> {
    app.editor.next_word();
    Ok(())
}

pub fn delete_prev_word(app: &mut App) -> anyhow::Result<()> {
    app.editor.delete_prev_word();
    Ok(())
}

pub fn delete_char(app: &mut App) -> anyhow::Result<()> {
    app.editor.delete_char();
    Ok(())
}

pub fn transpose_chars(app: &mut App) -> anyhow::Result<()> {
    app.editor.transpose_chars();
    Ok(())
}

pub fn yank(app: &mut App) -> anyhow::Result<()> {
    app.editor.yank();
    Ok(())
}
