use super::assignment::{DaySlot, WeeklyAssignment};
use super::export::PrintSheet;
use super::messages::Message;
use super::plan::BreakRecord;
use super::shift::{ShiftDefinition, WEEK};
use super::staff::Staff;
use crate::msg_print;
use prettytable::{row, Table};

/// Length of the id prefix shown in tables; any unique prefix is accepted back.
const SHORT_ID: usize = 8;

pub struct View {}

impl View {
    pub fn staff(staff: &[Staff]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DEPARTMENT", "POSITION"]);
        for member in staff {
            table.add_row(row![
                short_id(&member.id),
                member.full_name(),
                member.department,
                member.position.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();
    }

    pub fn shifts(shifts: &[ShiftDefinition]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "START", "END", "DAYS", "BREAKS"]);
        for shift in shifts {
            let days = shift.work_days.iter().map(|day| day.to_string()).collect::<Vec<_>>().join(", ");
            table.add_row(row![short_id(&shift.id), shift.name, shift.start, shift.end, days, shift.break_count]);
        }
        table.printstd();
    }

    /// Week grid: one line per staff member, one column per day starting Monday.
    pub fn weekly_plan(staff: &[Staff], assignments: &[WeeklyAssignment], shifts: &[ShiftDefinition]) {
        let mut table = Table::new();

        let mut header = row!["STAFF"];
        for day in WEEK {
            header.add_cell(prettytable::Cell::new(&day.to_string()));
        }
        table.add_row(header);

        for week in assignments {
            let name = staff
                .iter()
                .find(|member| member.id == week.staff_id)
                .map(Staff::full_name)
                .unwrap_or_else(|| Message::UnknownStaffLabel.to_string());

            let mut line = row![name];
            for day in WEEK {
                let cell = match week.slot(day) {
                    DaySlot::Empty => String::new(),
                    DaySlot::Shift(shift_id) => shifts
                        .iter()
                        .find(|shift| &shift.id == shift_id)
                        .map(ShiftDefinition::label)
                        .unwrap_or_else(|| Message::UnknownShiftLabel.to_string()),
                    DaySlot::Leave(leave) => leave.to_string(),
                };
                line.add_cell(prettytable::Cell::new(&cell));
            }
            table.add_row(line);
        }
        table.printstd();
    }

    pub fn breaks(breaks: &[BreakRecord], staff: &[Staff]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "STAFF", "DEPARTMENT", "BREAK", "START", "END", "MIN"]);
        for record in breaks {
            let name = staff
                .iter()
                .find(|member| member.id == record.staff_id)
                .map(Staff::full_name)
                .unwrap_or_else(|| Message::UnknownStaffLabel.to_string());
            table.add_row(row![
                short_id(&record.id),
                name,
                record.department,
                record.break_number,
                record.start,
                record.end,
                record.duration
            ]);
        }
        table.printstd();
    }

    pub fn print_sheet(sheet: &PrintSheet) {
        msg_print!(sheet.title, true);
        msg_print!(sheet.subtitle);

        for section in &sheet.sections {
            msg_print!(Message::DepartmentSection(section.department.to_string()), true);

            let mut table = Table::new();
            table.add_row(row!["STAFF", "DEPARTMENT", "BREAK 1", "BREAK 2", "BREAK 3"]);
            for line in &section.rows {
                table.add_row(row![line.staff, line.department, line.breaks[0], line.breaks[1], line.breaks[2]]);
            }
            table.printstd();
        }
    }
}

fn short_id(id: &str) -> &str {
    id.get(..SHORT_ID).unwrap_or(id)
}
