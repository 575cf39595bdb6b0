use super::formatter::format_timestamp;
use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Builds the grid table shown by `list`.
    pub fn tasks_table(tasks: &[Task]) -> Table {
        let mut table = Table::new();
        table.set_titles(row!["ID", "Description", "Status", "Created At", "Updated At"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.description,
                task.status,
                format_timestamp(&task.created_at),
                format_timestamp(&task.updated_at)
            ]);
        }

        table
    }

    pub fn tasks(tasks: &[Task]) {
        Self::tasks_table(tasks).printstd();
    }
}
