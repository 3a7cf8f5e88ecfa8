use super::{FilteredUsersCompute, UsersLoadCompute, UsersLoadResult};

/// What the table body shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TablePresentation {
    Loading,
    Error { message: String },
    /// `has_results` false replaces the table with a "no users found" message.
    Ready { has_results: bool },
}

pub fn table_presentation(
    load: &UsersLoadCompute,
    filtered: &FilteredUsersCompute,
) -> TablePresentation {
    match &load.result {
        UsersLoadResult::Loading => TablePresentation::Loading,
        UsersLoadResult::Error(err) => TablePresentation::Error {
            message: err.user_message(),
        },
        UsersLoadResult::Loaded { .. } => TablePresentation::Ready {
            has_results: !filtered.is_empty(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::{LoadUsersError, User};
    use chrono::Utc;

    fn filtered(count: u64) -> FilteredUsersCompute {
        let users = (1..=count)
            .map(|id| serde_json::from_value::<User>(serde_json::json!({ "id": id })).unwrap())
            .collect();
        FilteredUsersCompute {
            users,
            term: String::new(),
        }
    }

    #[test]
    fn fresh_mount_is_loading() {
        assert_eq!(
            table_presentation(&UsersLoadCompute::default(), &filtered(0)),
            TablePresentation::Loading
        );
    }

    #[test]
    fn error_carries_user_message() {
        let load = UsersLoadCompute::failed(LoadUsersError::DataFormat);
        assert_eq!(
            table_presentation(&load, &filtered(0)),
            TablePresentation::Error {
                message: "Invalid data format received from API".to_string()
            }
        );

        let load = UsersLoadCompute::failed(LoadUsersError::http_status(500));
        match table_presentation(&load, &filtered(0)) {
            TablePresentation::Error { message } => assert!(message.contains("500")),
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn loaded_is_ready_with_or_without_results() {
        let load = UsersLoadCompute::loaded(filtered(3).users, Utc::now());
        assert_eq!(
            table_presentation(&load, &filtered(3)),
            TablePresentation::Ready { has_results: true }
        );
        assert_eq!(
            table_presentation(&load, &filtered(0)),
            TablePresentation::Ready { has_results: false }
        );
    }
}
