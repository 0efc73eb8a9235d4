use crate::views::line::TimeDisplay;
use chrono::{DateTime, Utc};
use chrono_humanize::HumanTime;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use twodo_core::models::Task;

pub fn build_task_table(tasks: &[Task], now: DateTime<Utc>, display: &TimeDisplay) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Start", "Stop", "Due", "Theme", "Description"]);

    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(format!("{:04}", task.id)));
        row.add_cell(time_cell(task.start_time, now, display));
        row.add_cell(time_cell(task.stop_time, now, display));
        row.add_cell(Cell::new(HumanTime::from(task.stop_time - now)));
        row.add_cell(Cell::new(&task.theme));

        let mut description = Cell::new(&task.description);
        if task.is_done {
            description = description
                .add_attribute(Attribute::CrossedOut)
                .fg(Color::DarkGrey);
        }
        row.add_cell(description);

        table.add_row(row);
    }

    table
}

pub fn display_tasks(tasks: &[Task], now: DateTime<Utc>, display: &TimeDisplay) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    println!("{}", build_task_table(tasks, now, display));
}

fn time_cell(instant: DateTime<Utc>, now: DateTime<Utc>, display: &TimeDisplay) -> Cell {
    let cell = Cell::new(display.format(instant));
    if now > instant {
        cell.fg(Color::Red) // Overdue
    } else {
        cell.fg(Color::Green)
    }
}
