use askama::Template;
use crate::models::UserRow;
use super::filters;

#[derive(Template)]
#[template(path = "users_table.html", escape = "none")]
pub struct UsersTableTemplate<'a> {
    pub rows: &'a [UserRow],
}
