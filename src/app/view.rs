// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo window.

use super::{Message, CONTACTS_TABLE};
use crate::helpers::format::format_phone_number;
use crate::helpers::validation::{validate_email, validate_phone};
use crate::toolkit::Toolkit;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::notifications::Severity;
use crate::ui::theming::is_dark_mode;
use iced::widget::{button, scrollable, text, text_input, Column, Container, Row, Stack, Text};
use iced::{Element, Length};

const TITLE_SIZE: f32 = 24.0;
const SECTION_SIZE: f32 = 18.0;
const CELL_WIDTH: f32 = 220.0;

/// Context required to render the window.
pub struct ViewContext<'a> {
    pub toolkit: &'a Toolkit,
    pub filter_input: &'a str,
    pub applied_filter: String,
    pub email: &'a str,
    pub phone: &'a str,
}

/// Renders the page with toasts and the loading overlay stacked on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let toolkit = ctx.toolkit;
    let i18n = toolkit.i18n();

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(Text::new(i18n.tr("demo-title")).size(TITLE_SIZE))
        .push(view_toast_controls(toolkit))
        .push(section_title(i18n.tr("demo-section-loading")))
        .push(button(text(i18n.tr("demo-loading-show"))).on_press(Message::ShowLoading))
        .push(view_helpers(&ctx));

    let page = Container::new(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(toolkit.view_toasts().map(Message::Notification))
        .push(toolkit.view_loading::<Message>())
        .into()
}

fn section_title<'a>(label: String) -> Element<'a, Message> {
    Text::new(label).size(SECTION_SIZE).into()
}

fn view_toast_controls(toolkit: &Toolkit) -> Element<'_, Message> {
    let i18n = toolkit.i18n();
    let buttons = [
        Severity::Success,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
    ]
    .into_iter()
    .fold(Row::new().spacing(spacing::XS), |row, severity| {
        let label = i18n.tr(&format!("demo-toast-{}", severity.as_str()));
        row.push(button(text(label)).on_press(Message::Notify(severity)))
    });

    Column::new()
        .spacing(spacing::XS)
        .push(section_title(i18n.tr("demo-section-toasts")))
        .push(buttons)
        .into()
}

fn view_helpers<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let toolkit = ctx.toolkit;
    let i18n = toolkit.i18n();

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(button(text(i18n.tr("demo-copy"))).on_press(Message::CopyTable))
        .push(button(text(i18n.tr("demo-export"))).on_press(Message::ExportTable))
        .push(button(text(i18n.tr("demo-export-as"))).on_press(Message::ExportTableAs))
        .push(button(text(i18n.tr("demo-clear-table"))).on_press(Message::ClearTable));

    let filter = text_input(&i18n.tr("demo-filter-placeholder"), ctx.filter_input)
        .on_input(Message::FilterChanged)
        .width(Length::Fixed(CELL_WIDTH * 2.0));

    let email_row = Row::new()
        .spacing(spacing::XS)
        .push(
            text_input(&i18n.tr("demo-email-placeholder"), ctx.email)
                .on_input(Message::EmailChanged)
                .width(Length::Fixed(CELL_WIDTH)),
        )
        .push(validity_label(toolkit, validate_email(ctx.email)));

    let phone_row = Row::new()
        .spacing(spacing::XS)
        .push(
            text_input(&i18n.tr("demo-phone-placeholder"), ctx.phone)
                .on_input(Message::PhoneChanged)
                .width(Length::Fixed(CELL_WIDTH)),
        )
        .push(validity_label(toolkit, validate_phone(ctx.phone)))
        .push(Text::new(format_phone_number(ctx.phone)).size(typography::BODY));

    let dark_mode = i18n.tr_with_args(
        "demo-dark-mode",
        &[("state", if is_dark_mode() { "on" } else { "off" })],
    );
    let date = toolkit.format_date_now();
    let time = toolkit.format_timestamp_now();
    let now = i18n.tr_with_args("demo-now", &[("date", date.as_str()), ("time", time.as_str())]);

    Column::new()
        .spacing(spacing::SM)
        .push(section_title(i18n.tr("demo-section-helpers")))
        .push(actions)
        .push(filter)
        .push(view_table(toolkit, &ctx.applied_filter))
        .push(email_row)
        .push(phone_row)
        .push(Text::new(dark_mode).size(typography::BODY))
        .push(Text::new(now).size(typography::BODY))
        .into()
}

fn validity_label<'a>(toolkit: &Toolkit, valid: bool) -> Element<'a, Message> {
    let (key, color) = if valid {
        ("demo-valid", palette::SUCCESS)
    } else {
        ("demo-invalid", palette::ERROR)
    };
    Text::new(toolkit.i18n().tr(key))
        .size(typography::BODY)
        .color(color)
        .into()
}

fn view_table<'a>(toolkit: &Toolkit, query: &str) -> Element<'a, Message> {
    let Some(table) = toolkit.table(CONTACTS_TABLE) else {
        return Column::new().into();
    };
    let Some((header, body)) = table.rows().split_first() else {
        return Column::new().into();
    };

    let header_row = cells(header.iter().cloned());
    filter_rows(body, query)
        .into_iter()
        .map(|row| {
            cells(row.iter().enumerate().map(|(index, cell)| {
                if index == 1 {
                    format_phone_number(cell)
                } else {
                    cell.clone()
                }
            }))
        })
        .fold(
            Column::new().spacing(spacing::XXS).push(header_row),
            |column, row| column.push(row),
        )
        .into()
}

fn cells<'a>(values: impl Iterator<Item = String>) -> Element<'a, Message> {
    values
        .fold(Row::new().spacing(spacing::XS), |row, value| {
            row.push(
                Text::new(value)
                    .size(typography::BODY)
                    .width(Length::Fixed(CELL_WIDTH)),
            )
        })
        .into()
}

/// Rows containing `query` in any cell, ignoring case. An empty query keeps all.
pub(super) fn filter_rows<'r>(rows: &'r [Vec<String>], query: &str) -> Vec<&'r Vec<String>> {
    let query = query.trim().to_lowercase();
    rows.iter()
        .filter(|row| {
            query.is_empty()
                || row
                    .iter()
                    .any(|cell| cell.to_lowercase().contains(&query))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["Ana".into(), "ana@example.com".into()],
            vec!["Bruno".into(), "bruno@example.org".into()],
        ]
    }

    #[test]
    fn empty_query_keeps_every_row() {
        let rows = rows();
        assert_eq!(filter_rows(&rows, "  ").len(), 2);
    }

    #[test]
    fn query_matches_any_cell_case_insensitively() {
        let rows = rows();
        let matched = filter_rows(&rows, "ORG");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0][0], "Bruno");
    }
}
