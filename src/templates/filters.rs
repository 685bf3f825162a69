//! Custom askama filters. Templates run with askama's own escaper switched
//! off, so `esc` is the only thing standing between user text and the page.

use crate::utils::escape_html;

pub fn esc<T: std::fmt::Display>(value: T) -> ::askama::Result<String> {
    Ok(escape_html(&value.to_string()))
}
