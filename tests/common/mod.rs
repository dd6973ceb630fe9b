//! Shared test utilities.

#![allow(dead_code)]

pub mod mock_directory;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use unibrowse::model::Item;

pub fn item(name: &str, link: &str) -> Item {
    Item::new(name, vec![link.to_string()]).expect("valid test item")
}

pub fn items(names: &[&str]) -> Vec<Item> {
    names
        .iter()
        .map(|name| item(name, &format!("https://{}.example", name.to_lowercase())))
        .collect()
}

/// Renders `widget` into a fresh buffer of the given size.
pub fn render<W: Widget>(widget: W, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);
    buf
}

/// Buffer rows as plain strings.
pub fn lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Index of the first row containing `needle`.
pub fn row_of(buf: &Buffer, needle: &str) -> Option<usize> {
    lines(buf).iter().position(|line| line.contains(needle))
}

pub fn count_rows_containing(buf: &Buffer, needle: &str) -> usize {
    lines(buf).iter().filter(|line| line.contains(needle)).count()
}
