//! Plain-text rendering of the board for the terminal front-end.

use std::fmt::Write;

use crate::feed::{FilterSelection, Post};
use crate::ui::board::BoardState;

const CHECKBOXES_PER_ROW: usize = 4;

fn checkbox(checked: bool, label: &str) -> String {
    format!("[{}] {}", if checked { 'x' } else { ' ' }, label)
}

fn describe(selection: &FilterSelection) -> String {
    if selection.is_empty() {
        return "all posts".to_string();
    }
    selection
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checkbox grid plus a line saying what is applied.
pub fn render_filters(state: &BoardState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", checkbox(state.is_all_selected(), "All"));

    let boxes: Vec<String> = state
        .categories()
        .iter()
        .map(|c| checkbox(state.is_checked(c.as_str()), c.as_str()))
        .collect();
    for row in boxes.chunks(CHECKBOXES_PER_ROW) {
        let _ = writeln!(out, "{}", row.join("  "));
    }

    let _ = write!(out, "showing: {}", describe(state.committed_selection()));
    if !state.is_committed() && state.selection() != state.committed_selection() {
        let _ = write!(out, " (unapplied changes, type `apply`)");
    }
    out.push('\n');
    out
}

fn render_post(post: &Post) -> String {
    if post.nickname.is_empty() {
        format!("#{} [{}] {}", post.id, post.mbti, post.content)
    } else {
        format!(
            "#{} [{}] {}: {}",
            post.id, post.mbti, post.nickname, post.content
        )
    }
}

/// The visible page and the pagination footer.
pub fn render_page(state: &BoardState) -> String {
    let mut out = String::new();
    let page = state.visible_page();
    if page.is_empty() {
        let _ = writeln!(out, "(no posts)");
    }
    for post in page {
        let _ = writeln!(out, "{}", render_post(post));
    }

    let _ = write!(
        out,
        "page {}/{} · {} per page · {} posts",
        state.current_page(),
        state.total_pages(),
        state.items_per_page(),
        state.working_items().len()
    );
    if state.is_page_out_of_range() {
        let _ = write!(out, " (past the last page, type `page 1`)");
    }
    out.push('\n');
    out
}

pub fn render_board(state: &BoardState) -> String {
    format!("{}\n{}", render_filters(state), render_page(state))
}
