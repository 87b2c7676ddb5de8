use automobile_core::db::open_db_in_memory;
use automobile_core::{share_connection, AutomobileInput, AutomobileService, SqliteAutomobileStore};
use proptest::prelude::*;

fn service() -> AutomobileService<SqliteAutomobileStore> {
    let conn = open_db_in_memory().unwrap();
    AutomobileService::new(SqliteAutomobileStore::new(share_connection(conn)))
}

prop_compose! {
    fn arb_input()(
        make in any::<Option<String>>(),
        model in any::<Option<String>>(),
        year in any::<Option<i32>>(),
        vin in any::<Option<String>>(),
    ) -> AutomobileInput {
        AutomobileInput { make, model, year, vin }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn create_then_get_returns_equal_record(input in arb_input()) {
        let service = service();

        let created = service.create(&input).unwrap();
        prop_assert_eq!(&created.make, &input.make);
        prop_assert_eq!(&created.model, &input.model);
        prop_assert_eq!(created.year, input.year);
        prop_assert_eq!(&created.vin, &input.vin);

        let loaded = service.get_by_id(created.id).unwrap();
        prop_assert_eq!(loaded, Some(created));
    }

    #[test]
    fn list_holds_exactly_the_records_not_deleted(
        delete_mask in prop::collection::vec(any::<bool>(), 0..24),
    ) {
        let service = service();

        let created = delete_mask
            .iter()
            .map(|_| service.create(&AutomobileInput::default()).unwrap())
            .collect::<Vec<_>>();
        for (record, delete) in created.iter().zip(&delete_mask) {
            if *delete {
                service.delete_by_id(record.id).unwrap();
            }
        }

        let expected = created
            .iter()
            .zip(&delete_mask)
            .filter(|(_, delete)| !**delete)
            .map(|(record, _)| record.id)
            .collect::<Vec<_>>();
        let listed = service
            .list_all()
            .unwrap()
            .into_iter()
            .map(|record| record.id)
            .collect::<Vec<_>>();
        prop_assert_eq!(listed, expected);
    }
}
