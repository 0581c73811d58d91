#[cfg(test)]
mod tests {
    use breakplan::libs::assignment::{LeaveCode, WeeklyAssignment};
    use breakplan::libs::generator::{generate, BreakPolicy};
    use breakplan::libs::plan::BreakRecord;
    use breakplan::libs::shift::ShiftDefinition;
    use breakplan::libs::staff::{Department, Staff};
    use chrono::Weekday;
    use test_context::{test_context, TestContext};

    /// A 09:00-18:00 weekday shift and an empty roster to fill per test.
    struct GeneratorTestContext {
        shift: ShiftDefinition,
        roster: Vec<Staff>,
        weeks: Vec<WeeklyAssignment>,
    }

    impl TestContext for GeneratorTestContext {
        fn setup() -> Self {
            let shift = ShiftDefinition::new(
                "Day",
                "09:00".parse().unwrap(),
                "18:00".parse().unwrap(),
                &[Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri],
                3,
            );
            GeneratorTestContext {
                shift,
                roster: Vec::new(),
                weeks: Vec::new(),
            }
        }
    }

    impl GeneratorTestContext {
        /// Adds a staff member working the shift on Monday.
        fn hire(&mut self, name: &str, department: Department) -> String {
            let staff = Staff::new(name, "", department);
            let mut week = WeeklyAssignment::new(&staff.id);
            week.set_shift(Weekday::Mon, &self.shift.id);
            let id = staff.id.clone();
            self.roster.push(staff);
            self.weeks.push(week);
            id
        }

        fn monday(&self) -> Vec<BreakRecord> {
            generate(&self.shift, Weekday::Mon, &self.roster, &self.weeks)
        }
    }

    fn windows_of(breaks: &[BreakRecord], staff_id: &str) -> Vec<String> {
        breaks.iter().filter(|record| record.staff_id == staff_id).map(BreakRecord::window).collect()
    }

    #[test_context(GeneratorTestContext)]
    #[test]
    fn test_no_assigned_staff_yields_nothing(ctx: &mut GeneratorTestContext) {
        ctx.roster.push(Staff::new("Idle", "", Department::Sales));
        assert!(ctx.monday().is_empty());
    }

    #[test_context(GeneratorTestContext)]
    #[test]
    fn test_shift_not_running_that_day(ctx: &mut GeneratorTestContext) {
        let id = ctx.hire("Ada", Department::Sales);
        ctx.weeks[0].set_shift(Weekday::Sat, &ctx.shift.id);

        assert!(generate(&ctx.shift, Weekday::Sat, &ctx.roster, &ctx.weeks).is_empty());
        assert_eq!(windows_of(&ctx.monday(), &id).len(), 3);
    }

    #[test_context(GeneratorTestContext)]
    #[test]
    fn test_leave_days_are_skipped(ctx: &mut GeneratorTestContext) {
        ctx.hire("Ada", Department::Sales);
        ctx.weeks[0].set_leave(Weekday::Mon, LeaveCode::Sick);
        assert!(ctx.monday().is_empty());
    }

    #[test_context(GeneratorTestContext)]
    #[test]
    fn test_two_departments_scenario(ctx: &mut GeneratorTestContext) {
        let a = ctx.hire("A", Department::Sales);
        let b = ctx.hire("B", Department::Cashier);

        let breaks = ctx.monday();
        assert_eq!(breaks.len(), 6);
        assert_eq!(windows_of(&breaks, &a), vec!["11:15-11:45", "13:30-14:15", "15:45-16:15"]);
        assert_eq!(windows_of(&breaks, &b), vec!["11:45-12:15", "14:00-14:45", "16:15-16:45"]);
    }

    #[test_context(GeneratorTestContext)]
    #[test]
    fn test_staff_stagger_within_department(ctx: &mut GeneratorTestContext) {
        let ids: Vec<String> = ["A", "B", "C"].iter().map(|name| ctx.hire(name, Department::Warehouse)).collect();

        let breaks = ctx.monday();
        let first_starts: Vec<String> = ids.iter().map(|id| windows_of(&breaks, id)[0].clone()).collect();
        assert_eq!(first_starts, vec!["11:15-11:45", "11:35-12:05", "11:55-12:25"]);
    }

    #[test_context(GeneratorTestContext)]
    #[test]
    fn test_departments_follow_discovery_order(ctx: &mut GeneratorTestContext) {
        let a = ctx.hire("A", Department::Sales);
        let b = ctx.hire("B", Department::Cashier);
        let c = ctx.hire("C", Department::Sales);

        let breaks = ctx.monday();
        // Sales (A, C) first, then the 10 minute gap, then Cashier (B)
        assert_eq!(windows_of(&breaks, &a)[0], "11:15-11:45");
        assert_eq!(windows_of(&breaks, &c)[0], "11:35-12:05");
        assert_eq!(windows_of(&breaks, &b)[0], "12:05-12:35");

        let order: Vec<&str> = breaks.iter().map(|record| record.staff_id.as_str()).collect();
        assert_eq!(&order[..3], &[a.as_str(); 3]);
        assert_eq!(&order[3..6], &[c.as_str(); 3]);
        assert_eq!(&order[6..], &[b.as_str(); 3]);
    }

    #[test_context(GeneratorTestContext)]
    #[test]
    fn test_durations_and_numbers(ctx: &mut GeneratorTestContext) {
        ctx.hire("Ada", Department::Management);

        let breaks = ctx.monday();
        let numbers: Vec<u8> = breaks.iter().map(|record| record.break_number).collect();
        let durations: Vec<u32> = breaks.iter().map(|record| record.duration).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(durations, vec![30, 45, 30]);
        for record in &breaks {
            assert_eq!(record.end, record.start.add_minutes(record.duration));
            assert_eq!(record.department, Department::Management);
        }
    }

    #[test_context(GeneratorTestContext)]
    #[test]
    fn test_break_count_is_not_consulted(ctx: &mut GeneratorTestContext) {
        ctx.shift.break_count = 1;
        ctx.hire("Ada", Department::Sales);
        assert_eq!(ctx.monday().len(), 3);

        ctx.shift.break_count = 5;
        assert_eq!(ctx.monday().len(), 3);
    }

    #[test_context(GeneratorTestContext)]
    #[test]
    fn test_roster_order_wins_over_assignment_order(ctx: &mut GeneratorTestContext) {
        let a = ctx.hire("A", Department::Sales);
        let b = ctx.hire("B", Department::Sales);
        ctx.weeks.reverse();

        let breaks = ctx.monday();
        assert_eq!(windows_of(&breaks, &a)[0], "11:15-11:45");
        assert_eq!(windows_of(&breaks, &b)[0], "11:35-12:05");
    }

    #[test_context(GeneratorTestContext)]
    #[test]
    fn test_late_breaks_run_past_midnight(ctx: &mut GeneratorTestContext) {
        ctx.shift.start = "14:00".parse().unwrap();
        ctx.shift.end = "23:40".parse().unwrap();
        ctx.hire("Ada", Department::Sales);

        let breaks = ctx.monday();
        // 75% of 580 minutes is 435 -> 21:15
        assert_eq!(breaks[2].window(), "21:15-21:45");

        let policy = BreakPolicy {
            anchors_percent: [25, 50, 100],
            ..BreakPolicy::default()
        };
        let breaks = policy.generate(&ctx.shift, Weekday::Mon, &ctx.roster, &ctx.weeks);
        assert_eq!(breaks[2].window(), "23:40-24:10");
    }

    #[test_context(GeneratorTestContext)]
    #[test]
    fn test_custom_policy(ctx: &mut GeneratorTestContext) {
        let a = ctx.hire("A", Department::Sales);
        let b = ctx.hire("B", Department::Cashier);
        let policy = BreakPolicy {
            anchors_percent: [0, 50, 100],
            durations: [15, 30, 15],
            staff_stagger: 5,
            department_gap: 0,
        };

        let breaks = policy.generate(&ctx.shift, Weekday::Mon, &ctx.roster, &ctx.weeks);
        assert_eq!(windows_of(&breaks, &a), vec!["09:00-09:15", "13:30-14:00", "18:00-18:15"]);
        assert_eq!(windows_of(&breaks, &b), vec!["09:05-09:20", "13:35-14:05", "18:05-18:20"]);
    }
}
