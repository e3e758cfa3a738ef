use colored::Colorize;
use unicode_width::UnicodeWidthStr;
use userdir::api::{CmdMessage, MessageLevel};
use userdir::model::User;

const COLUMN_GAP: &str = "  ";
const HEADERS: [&str; 4] = ["ID", "Name", "Last name", "Phone"];

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Render users as an aligned table, in list order.
pub(super) fn render_user_table(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found.\n".to_string();
    }

    let rows: Vec<[String; 4]> = users
        .iter()
        .map(|u| {
            [
                u.id.to_string(),
                u.name.clone(),
                u.lastname.clone(),
                u.phone.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let mut output = String::new();
    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| pad(h, *w))
        .collect();
    output.push_str(&format!("{}\n", header.join(COLUMN_GAP).trim_end().bold()));

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(i, (cell, w))| {
                // ids are right-aligned
                if i == 0 {
                    pad_left(cell, *w)
                } else {
                    pad(cell, *w)
                }
            })
            .collect();
        output.push_str(cells.join(COLUMN_GAP).trim_end());
        output.push('\n');
    }
    output
}

pub(super) fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message);
    }
    let mut output = lines.join("\n");
    output.push('\n');
    output
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn pad_left(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", " ".repeat(fill), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64, name: &str, lastname: &str, phone: &str) -> User {
        User {
            id,
            name: name.to_string(),
            lastname: lastname.to_string(),
            phone: phone.to_string(),
        }
    }

    #[test]
    fn empty_list_message() {
        assert_eq!(render_user_table(&[]), "No users found.\n");
    }

    #[test]
    fn table_aligns_columns() {
        colored::control::set_override(false);
        let output = render_user_table(&[
            user(1, "Ana", "Ruiz", "555"),
            user(10, "Leanne", "", "1-770-736"),
        ]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ID  Name    Last name  Phone");
        assert_eq!(lines[1], " 1  Ana     Ruiz       555");
        assert_eq!(lines[2], "10  Leanne             1-770-736");
    }

    #[test]
    fn wide_characters_count_as_two_columns() {
        colored::control::set_override(false);
        let output = render_user_table(&[user(1, "日本", "X", ""), user(2, "Ana", "Y", "")]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], " 1  日本  X");
        assert_eq!(lines[2], " 2  Ana   Y");
    }

    #[test]
    fn text_list_falls_back_to_empty_message() {
        assert_eq!(render_text_list(&[], "Nothing."), "Nothing.\n");
        assert_eq!(
            render_text_list(&["a = 1".to_string(), "b = 2".to_string()], "Nothing."),
            "a = 1\nb = 2\n"
        );
    }
}
