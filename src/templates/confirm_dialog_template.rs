use askama::Template;
use super::filters;

#[derive(Template)]
#[template(path = "confirm_dialog.html", escape = "none")]
pub struct ConfirmDialogTemplate<'a> {
    pub shown: bool,
    pub message: &'a str,
}
