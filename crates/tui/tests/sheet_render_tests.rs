//! Rendering of the cover sheet layers onto a buffer.

mod helpers;

use std::time::Instant;

use coversheet_config::Theme;
use coversheet_tui::sheet::HeightFactor;
use helpers::{ms, row_text, screen, text_sheet};
use ratatui::buffer::Buffer;
use ratatui::style::Modifier;
use ratatui::widgets::{Paragraph, Widget};

fn host(width: u16, height: u16) -> Paragraph<'static> {
    let line = "x".repeat(width as usize);
    Paragraph::new(vec![line.into(); height as usize])
}

fn rows_containing(buf: &Buffer, needle: &str) -> Vec<u16> {
    (0..buf.area.height)
        .filter(|y| row_text(buf, *y).contains(needle))
        .collect()
}

#[test]
fn test_half_and_quarter_frames_span_full_width() {
    let area = screen(40, 24);
    let t0 = Instant::now();

    let (mut half, _) = text_sheet(HeightFactor::HALF, "half");
    half.sync(true, t0);
    let frame = half.content_frame(area).unwrap();
    assert_eq!((frame.y, frame.width, frame.height), (12, 40, 12));

    let (mut quarter, _) = text_sheet(HeightFactor::QUARTER, "quarter");
    quarter.sync(true, t0);
    let frame = quarter.content_frame(area).unwrap();
    assert_eq!((frame.y, frame.width, frame.height), (18, 40, 6));
}

#[test]
fn test_closed_sheet_renders_host_unmodified() {
    let area = screen(20, 10);
    let (sheet, _) = text_sheet(HeightFactor::HALF, "body");

    let mut expected = Buffer::empty(area);
    host(20, 10).render(area, &mut expected);

    let mut buf = Buffer::empty(area);
    sheet.render(host(20, 10), area, &mut buf);
    assert_eq!(buf, expected);
}

#[test]
fn test_opening_shows_backdrop_without_content() {
    let area = screen(20, 12);
    let t0 = Instant::now();
    let (mut sheet, _) = text_sheet(HeightFactor::HALF, "body");
    sheet.sync(true, t0);
    sheet.tick(t0 + ms(100));

    let mut buf = Buffer::empty(area);
    sheet.render(host(20, 12), area, &mut buf);

    assert!(rows_containing(&buf, "body").is_empty());
    for y in [0, 6, 11] {
        assert!(buf[(3, y)].modifier.contains(Modifier::DIM));
        assert_eq!(buf[(3, y)].bg, Theme::default().backdrop);
    }
}

#[test]
fn test_open_sheet_occupies_bottom_rows() {
    let area = screen(30, 24);
    let t0 = Instant::now();
    let (mut sheet, _) = text_sheet(HeightFactor::HALF, "body");
    sheet.sync(true, t0);
    sheet.tick(t0 + ms(250));
    sheet.tick(t0 + ms(450));

    let mut buf = Buffer::empty(area);
    sheet.render(host(30, 24), area, &mut buf);

    assert_eq!(rows_containing(&buf, "body"), vec![12]);
    let theme = Theme::default();
    for y in 12..24 {
        assert_eq!(buf[(29, y)].bg, theme.sheet_bg, "row {y} belongs to the sheet");
        assert!(!buf[(29, y)].modifier.contains(Modifier::DIM));
    }
    assert_eq!(buf[(0, 11)].bg, theme.shadow, "shadow sits above the frame");
    assert_eq!(buf[(0, 10)].bg, theme.backdrop);
}

#[test]
fn test_content_slides_up_from_bottom_edge() {
    let area = screen(30, 24);
    let t0 = Instant::now();
    let (mut sheet, _) = text_sheet(HeightFactor::HALF, "body");
    sheet.sync(true, t0);
    sheet.tick(t0 + ms(250));
    sheet.tick(t0 + ms(350));

    let mut buf = Buffer::empty(area);
    sheet.render(host(30, 24), area, &mut buf);

    let rows = rows_containing(&buf, "body");
    assert_eq!(rows.len(), 1);
    assert!(rows[0] > 12 && rows[0] < 24, "mid-slide, got row {}", rows[0]);
}

#[test]
fn test_content_leaves_before_backdrop() {
    let area = screen(30, 24);
    let t0 = Instant::now();
    let (mut sheet, _) = text_sheet(HeightFactor::QUARTER, "body");
    sheet.sync(true, t0);
    sheet.tick(t0 + ms(500));
    sheet.dismiss(t0 + ms(500));
    sheet.tick(t0 + ms(700));

    let mut buf = Buffer::empty(area);
    sheet.render(host(30, 24), area, &mut buf);

    assert!(rows_containing(&buf, "body").is_empty());
    assert!(sheet.is_mounted());
    assert_eq!(buf[(5, 20)].bg, Theme::default().backdrop);
}

#[test]
fn test_nested_attachments_stack_quarter_over_half() {
    let area = screen(30, 24);
    let t0 = Instant::now();
    let (mut half, _) = text_sheet(HeightFactor::HALF, "half body");
    let (mut quarter, _) = text_sheet(HeightFactor::QUARTER, "quarter body");
    half.sync(true, t0);
    quarter.sync(true, t0);
    half.tick(t0 + ms(500));
    quarter.tick(t0 + ms(500));

    let mut buf = Buffer::empty(area);
    quarter
        .attach(half.attach(host(30, 24)))
        .render(area, &mut buf);

    assert_eq!(rows_containing(&buf, "quarter body"), vec![18]);
    assert_eq!(rows_containing(&buf, "half body"), vec![12]);
    assert!(
        buf[(20, 12)].modifier.contains(Modifier::DIM),
        "the half sheet is defocused beneath the quarter sheet"
    );
}

#[test]
fn test_tiny_container_still_renders() {
    let area = screen(10, 1);
    let t0 = Instant::now();
    let (mut sheet, _) = text_sheet(HeightFactor::QUARTER, "b");
    sheet.sync(true, t0);
    sheet.tick(t0 + ms(500));

    let mut buf = Buffer::empty(area);
    sheet.render(host(10, 1), area, &mut buf);
    assert_eq!(rows_containing(&buf, "b"), vec![0]);
}
