use askama::Template;
use crate::models::UserAsset;
use super::filters;

#[derive(Template)]
#[template(path = "user_assets.html", escape = "none")]
pub struct UserAssetsTemplate<'a> {
    pub username: &'a str,
    pub assets: &'a [UserAsset],
}

/// Modal shell around whatever the assets body currently is.
#[derive(Template)]
#[template(path = "assets_modal.html", escape = "none")]
pub struct AssetsModalTemplate<'a> {
    pub open: bool,
    pub user_id: i64,
    pub body: &'a str,
}
