//! Identity substitution
//!
//! Plain literal replacement of [`APP_NAME_PLACEHOLDER`]; no escaping.

use crate::bundle::Bundle;
use forge_template::APP_NAME_PLACEHOLDER;

/// Replace every placeholder occurrence in `text`
#[inline]
#[must_use]
pub fn substitute(text: &str, app_name: &str) -> String {
    text.replace(APP_NAME_PLACEHOLDER, app_name)
}

/// Substitute all four fields and record the resolved name
#[must_use]
pub fn substitute_bundle(bundle: Bundle, app_name: &str) -> Bundle {
    Bundle {
        origin: bundle.origin,
        app_name: app_name.to_string(),
        frontend_code: substitute(&bundle.frontend_code, app_name),
        backend_code: substitute(&bundle.backend_code, app_name),
        database_schema: substitute(&bundle.database_schema, app_name),
        deploy_instructions: substitute(&bundle.deploy_instructions, app_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn replaces_every_occurrence() {
        assert_eq!(
            substitute("{APP_NAME} and {APP_NAME}", "Demo"),
            "Demo and Demo"
        );
    }

    #[test]
    fn bundle_fields_all_substituted() {
        let bundle = substitute_bundle(Bundle::hard_default("ignored"), "Shop");
        assert_eq!(bundle.app_name, "Shop");
        for field in [
            &bundle.frontend_code,
            &bundle.backend_code,
            &bundle.database_schema,
            &bundle.deploy_instructions,
        ] {
            assert!(!field.contains(APP_NAME_PLACEHOLDER));
            assert!(field.contains("Shop"));
        }
    }

    proptest! {
        #[test]
        fn substitution_is_idempotent(
            pieces in prop::collection::vec(
                prop_oneof![
                    Just("{APP_NAME}".to_string()),
                    Just("{".to_string()),
                    Just("}".to_string()),
                    "[a-z <>/=]{0,8}",
                ],
                0..24,
            ),
            name in "[A-Za-z][A-Za-z0-9]{0,15}",
        ) {
            let text: String = pieces.concat();
            let once = substitute(&text, &name);
            let twice = substitute(&once, &name);
            prop_assert_eq!(once, twice);
        }
    }
}
