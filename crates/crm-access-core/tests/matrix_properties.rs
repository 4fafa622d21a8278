use crm_access_core::{
    ObjectPermission, ObjectType, PermissionAction, PermissionCheck, PermissionGate,
    PermissionLevel, PermissionMatrix, PermissionSnapshot,
};
use proptest::prelude::*;

fn arb_permission() -> impl Strategy<Value = ObjectPermission> {
    proptest::array::uniform4(any::<bool>())
        .prop_map(|[create, read, edit, delete]| ObjectPermission::new(create, read, edit, delete))
}

fn arb_matrix() -> impl Strategy<Value = PermissionMatrix> {
    (arb_permission(), arb_permission(), arb_permission(), arb_permission()).prop_map(
        |(accounts, contacts, opportunities, activities)| PermissionMatrix {
            accounts,
            contacts,
            opportunities,
            activities,
        },
    )
}

fn all_flags(matrix: &PermissionMatrix) -> impl Iterator<Item = bool> + '_ {
    ObjectType::ALL.into_iter().flat_map(move |object| {
        PermissionAction::ALL
            .into_iter()
            .map(move |action| matrix.get(object).allows(action))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn has_permission_reads_back_every_flag(matrix in arb_matrix()) {
        let check = matrix.check();
        let mut rebuilt = PermissionMatrix::no_access();
        for object in ObjectType::ALL {
            for action in PermissionAction::ALL {
                rebuilt.set(object, action, check.has_permission(object, action));
            }
        }
        prop_assert_eq!(rebuilt, matrix);
    }

    #[test]
    fn can_access_is_read(matrix in arb_matrix()) {
        let check = matrix.check();
        for object in ObjectType::ALL {
            prop_assert_eq!(
                check.can_access_object(object),
                check.has_permission(object, PermissionAction::Read)
            );
        }
    }

    #[test]
    fn full_access_iff_all_sixteen(matrix in arb_matrix()) {
        let expected = all_flags(&matrix).all(|flag| flag);
        prop_assert_eq!(matrix.check().has_full_access(), expected);
    }

    #[test]
    fn admin_exactly_when_full_access(matrix in arb_matrix()) {
        let check = matrix.check();
        let level = check.permission_level();
        prop_assert_eq!(level == PermissionLevel::Admin, check.has_full_access());
        prop_assert_ne!(level, PermissionLevel::None);
        // Deterministic
        prop_assert_eq!(level, check.permission_level());
    }

    #[test]
    fn manager_never_reported_as_user(matrix in arb_matrix()) {
        let check = matrix.check();
        let creates = ObjectType::ALL.into_iter().any(|o| check.can_create(o));
        let edits = ObjectType::ALL.into_iter().any(|o| check.can_edit(o));
        let level = check.permission_level();

        if level == PermissionLevel::User {
            prop_assert!(edits && !creates);
        }
        if creates && edits && !check.has_full_access() {
            prop_assert_eq!(level, PermissionLevel::Manager);
        }
    }

    #[test]
    fn read_only_and_manage_are_exclusive(matrix in arb_matrix()) {
        let check = matrix.check();
        for object in ObjectType::ALL {
            prop_assert!(!(check.is_read_only(object) && check.can_manage(object)));
            if check.is_read_only(object) {
                prop_assert!(check.has_any_permission(object));
            }
        }
    }

    #[test]
    fn gate_matches_predicate_once_loaded(matrix in arb_matrix()) {
        let snapshot = PermissionSnapshot::loaded(matrix);
        for object in ObjectType::ALL {
            for action in PermissionAction::ALL {
                let decision = PermissionGate::new(object, action).decide(&snapshot);
                prop_assert_eq!(decision.is_granted(), matrix.get(object).allows(action));
            }
        }
    }
}

#[test]
fn unloaded_matrix_answers_false() {
    let check = PermissionCheck::new(None);
    for object in ObjectType::ALL {
        for action in PermissionAction::ALL {
            assert!(!check.has_permission(object, action));
        }
    }
}

#[test]
fn full_admin_scenario() {
    let snapshot = PermissionSnapshot::loaded(PermissionMatrix::full_access());
    let check = snapshot.check();

    assert_eq!(check.permission_level(), PermissionLevel::Admin);
    assert!(check.has_full_access());
    for object in ObjectType::ALL {
        for action in PermissionAction::ALL {
            let rendered = PermissionGate::new(object, action)
                .decide(&snapshot)
                .render("children", Some("fallback"));
            assert_eq!(rendered, Some("children"), "{object}.{action}");
        }
    }
}

#[test]
fn manager_classification_scenario() {
    let matrix = PermissionMatrix::no_access()
        .with(ObjectType::Accounts, PermissionAction::Create, true)
        .with(ObjectType::Contacts, PermissionAction::Edit, true);
    let check = matrix.check();

    assert_eq!(check.permission_level(), PermissionLevel::Manager);
    assert!(!check.has_full_access());
}
