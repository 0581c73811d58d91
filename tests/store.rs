#[cfg(test)]
mod tests {
    use breakplan::db::providers::{preview_breaks, AssignmentBook, Roster, ShiftCatalog};
    use breakplan::db::store::{lookup, Lookup, Store, DATA_FILE_NAME};
    use breakplan::libs::assignment::{DaySlot, LeaveCode, WeeklyAssignment};
    use breakplan::libs::generator::BreakPolicy;
    use breakplan::libs::plan::BreakRecord;
    use breakplan::libs::shift::ShiftDefinition;
    use breakplan::libs::staff::{Department, Staff};
    use chrono::{NaiveDate, Weekday};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// A store backed by a data file in a fresh temporary directory.
    struct StoreTestContext {
        temp_dir: TempDir,
        store: Store,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = Store::open(temp_dir.path().join(DATA_FILE_NAME)).unwrap();
            StoreTestContext { temp_dir, store }
        }
    }

    impl StoreTestContext {
        fn path(&self, name: &str) -> PathBuf {
            self.temp_dir.path().join(name)
        }

        /// Day shift on Mondays with one salesperson on it.
        fn seed(&mut self) -> (String, String) {
            let shift = ShiftDefinition::new("Day", "09:00".parse().unwrap(), "18:00".parse().unwrap(), &[Weekday::Mon], 3);
            let shift_id = self.store.add_shift(shift).unwrap().id.clone();
            let staff_id = self.store.add_staff(Staff::new("Ada", "Lovelace", Department::Sales)).unwrap().id.clone();

            let mut week = WeeklyAssignment::new(&staff_id);
            week.set_shift(Weekday::Mon, &shift_id);
            self.store.save_assignment(week).unwrap();
            (staff_id, shift_id)
        }
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_missing_file_is_empty_store(ctx: &mut StoreTestContext) {
        assert!(ctx.store.staff().is_empty());
        assert!(ctx.store.shifts().is_empty());
        assert!(ctx.store.plans().is_empty());
        assert!(!ctx.store.path().exists());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_staff_crud(ctx: &mut StoreTestContext) {
        let id = ctx.store.add_staff(Staff::new("Ada", "Lovelace", Department::Sales)).unwrap().id.clone();
        assert!(ctx.store.add_staff(Staff::new("  ", "Nobody", Department::Sales)).is_err());

        let mut staff = ctx.store.find_staff(&id).unwrap().clone();
        staff.department = Department::Cashier;
        ctx.store.update_staff(staff).unwrap();
        assert_eq!(ctx.store.find_staff(&id).unwrap().department, Department::Cashier);

        let removed = ctx.store.remove_staff(&id).unwrap();
        assert_eq!(removed.full_name(), "Ada Lovelace");
        assert!(ctx.store.remove_staff(&id).is_none());
        assert!(ctx.store.find_staff(&id).is_err());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_shift_validation_on_add(ctx: &mut StoreTestContext) {
        let inverted = ShiftDefinition::new("Late", "18:00".parse().unwrap(), "09:00".parse().unwrap(), &[Weekday::Mon], 3);
        assert!(ctx.store.add_shift(inverted).is_err());
        let no_days = ShiftDefinition::new("Idle", "09:00".parse().unwrap(), "18:00".parse().unwrap(), &[], 3);
        assert!(ctx.store.add_shift(no_days).is_err());
        assert!(ctx.store.shifts().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_removing_shift_clears_assignments(ctx: &mut StoreTestContext) {
        let (staff_id, shift_id) = ctx.seed();
        let mut week = ctx.store.assignment_for(&staff_id).unwrap().clone();
        week.set_leave(Weekday::Tue, LeaveCode::Paid);
        ctx.store.save_assignment(week).unwrap();

        let (shift, cleared) = ctx.store.remove_shift(&shift_id).unwrap();
        assert_eq!(shift.name, "Day");
        assert_eq!(cleared, 1);

        let week = ctx.store.assignment_for(&staff_id).unwrap();
        assert_eq!(*week.slot(Weekday::Mon), DaySlot::Empty);
        assert_eq!(*week.slot(Weekday::Tue), DaySlot::Leave(LeaveCode::Paid));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_assignment_upsert_keeps_id(ctx: &mut StoreTestContext) {
        let (staff_id, shift_id) = ctx.seed();
        let original_id = ctx.store.assignment_for(&staff_id).unwrap().id.clone();

        let mut week = WeeklyAssignment::new(&staff_id);
        week.set_shift(Weekday::Wed, &shift_id);
        ctx.store.save_assignment(week).unwrap();

        assert_eq!(ctx.store.assignments().len(), 1);
        let saved = ctx.store.assignment_for(&staff_id).unwrap();
        assert_eq!(saved.id, original_id);
        assert_eq!(saved.shift_on(Weekday::Wed), Some(shift_id.as_str()));
        assert_eq!(saved.shift_on(Weekday::Mon), None);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_assignment_validation(ctx: &mut StoreTestContext) {
        let (staff_id, _) = ctx.seed();

        assert!(ctx.store.save_assignment(WeeklyAssignment::new(&staff_id)).is_err());

        let mut week = WeeklyAssignment::new(&staff_id);
        week.set_shift(Weekday::Mon, "no-such-shift");
        assert!(ctx.store.save_assignment(week).is_err());

        let mut week = WeeklyAssignment::new("no-such-staff");
        week.set_leave(Weekday::Mon, LeaveCode::Weekly);
        assert!(ctx.store.save_assignment(week).is_err());

        assert!(ctx.store.remove_assignment(&staff_id));
        assert!(!ctx.store.remove_assignment(&staff_id));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_and_reopen(ctx: &mut StoreTestContext) {
        let (staff_id, shift_id) = ctx.seed();
        let policy = BreakPolicy::default();
        assert_eq!(ctx.store.break_plan(monday(), &shift_id, &policy).unwrap().unwrap().breaks.len(), 3);
        ctx.store.save().unwrap();

        let reopened = Store::open(ctx.store.path()).unwrap();
        assert_eq!(reopened.snapshot(), ctx.store.snapshot());
        assert_eq!(reopened.find_staff(&staff_id).unwrap().first_name, "Ada");
        assert_eq!(reopened.plans().find(monday(), &shift_id).unwrap().breaks[0].window(), "11:15-11:45");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_unreadable_file_is_an_error(ctx: &mut StoreTestContext) {
        let path = ctx.path("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Store::open(&path).is_err());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_backup_restore_and_reset(ctx: &mut StoreTestContext) {
        let (staff_id, shift_id) = ctx.seed();
        ctx.store.ensure_plans_for(monday(), &BreakPolicy::default());
        let backup = ctx.path("backup.json");
        ctx.store.backup(&backup).unwrap();

        let content = std::fs::read_to_string(&backup).unwrap();
        assert!(content.contains("backed_up_at"));

        let before = ctx.store.snapshot().clone();
        ctx.store.reset();
        assert!(ctx.store.staff().is_empty());
        assert!(ctx.store.plans().is_empty());

        ctx.store.restore(&backup).unwrap();
        assert_eq!(*ctx.store.snapshot(), before);
        assert!(ctx.store.find_staff(&staff_id).is_ok());
        assert!(ctx.store.plans().find(monday(), &shift_id).is_some());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_failed_restore_keeps_data(ctx: &mut StoreTestContext) {
        ctx.seed();
        let missing = ctx.path("missing.json");
        assert!(ctx.store.restore(&missing).is_err());
        assert_eq!(ctx.store.staff().len(), 1);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_upsert_break_through_store(ctx: &mut StoreTestContext) {
        let (staff_id, shift_id) = ctx.seed();
        let staff = ctx.store.find_staff(&staff_id).unwrap().clone();

        let record = BreakRecord::manual(&staff, 2).unwrap();
        ctx.store.upsert_break(monday(), &shift_id, record).unwrap();
        let plan = ctx.store.plans().find(monday(), &shift_id).unwrap();
        assert_eq!(plan.breaks.len(), 1);
        assert_eq!(plan.breaks[0].window(), "14:00-14:45");

        assert!(ctx.store.upsert_break(monday(), "", BreakRecord::manual(&staff, 1).unwrap()).is_err());
        assert!(ctx.store.break_plan(monday(), "no-such-shift", &BreakPolicy::default()).is_err());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_regenerate_through_store(ctx: &mut StoreTestContext) {
        let (staff_id, shift_id) = ctx.seed();
        let staff = ctx.store.find_staff(&staff_id).unwrap().clone();
        ctx.store.upsert_break(monday(), &shift_id, BreakRecord::manual(&staff, 1).unwrap()).unwrap();

        assert_eq!(ctx.store.regenerate(monday(), &shift_id, &BreakPolicy::default()).unwrap(), 3);
        let windows: Vec<String> = ctx
            .store
            .plans()
            .find(monday(), &shift_id)
            .unwrap()
            .breaks
            .iter()
            .map(BreakRecord::window)
            .collect();
        assert_eq!(windows, vec!["11:15-11:45", "13:30-14:15", "15:45-16:15"]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_preview_leaves_plans_alone(ctx: &mut StoreTestContext) {
        let (_, shift_id) = ctx.seed();
        let policy = BreakPolicy::default();

        let preview = preview_breaks(&ctx.store, &shift_id, monday(), &policy).unwrap();
        assert_eq!(preview.len(), 3);
        assert!(ctx.store.plans().is_empty());

        // A snapshot serves as a data source too
        let snapshot = ctx.store.snapshot().clone();
        assert_eq!(Roster::staff(&snapshot).len(), 1);
        assert_eq!(ShiftCatalog::shifts(&snapshot).len(), 1);
        assert_eq!(AssignmentBook::assignments(&snapshot).len(), 1);
        assert_eq!(preview_breaks(&snapshot, &shift_id, monday(), &policy).unwrap().len(), 3);

        assert!(preview_breaks(&snapshot, "no-such-shift", monday(), &policy).is_err());
    }

    fn id(item: &String) -> &str {
        item
    }

    #[test]
    fn test_lookup_by_prefix() {
        let ids = vec!["abc123".to_string(), "abd456".to_string(), "xyz".to_string()];

        assert!(matches!(lookup(&ids, "abc123", id), Lookup::Found(item) if item == "abc123"));
        assert!(matches!(lookup(&ids, "abc", id), Lookup::Found(item) if item == "abc123"));
        assert!(matches!(lookup(&ids, "x", id), Lookup::Found(item) if item == "xyz"));
        assert!(matches!(lookup(&ids, "ab", id), Lookup::Ambiguous));
        assert!(matches!(lookup(&ids, "q", id), Lookup::Missing));
        assert!(matches!(lookup(&ids, "", id), Lookup::Missing));
    }
}
