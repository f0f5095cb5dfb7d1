use prettytable::{row, Table};
use std::collections::BTreeMap;

pub struct View {}

impl View {
    /// Builds the name/id table printed when no default activity exists.
    pub fn activities_table(activities: &BTreeMap<String, u64>) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "ACTIVITY"]);
        for (name, id) in activities {
            table.add_row(row![id, name]);
        }
        table
    }

    pub fn activities(activities: &BTreeMap<String, u64>) {
        Self::activities_table(activities).printstd();
    }
}
