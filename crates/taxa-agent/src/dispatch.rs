//! Routing from API paths to taxonomy operations.

use tracing::info;

use taxa_store::TableStore;
use taxa_taxonomy::{ErrorKind, TaxonomyError, TaxonomyStore};
use taxa_types::CategoryNode;

use crate::config::AgentConfig;
use crate::envelope::{AgentRequest, AgentResponse};
use crate::outcome::Outcome;
use crate::params::ParamMap;

/// API path of the add operation.
pub const ADD_PATH: &str = "/addcategory";
/// API path of the delete operation.
pub const DELETE_PATH: &str = "/delete-category";
/// API path of the full listing; a trailing `/{name}` selects one category.
pub const CATEGORIES_PATH: &str = "/categories";

/// Map an operation failure to the HTTP status the transport reports.
///
/// Invalid input and hierarchy-shape conflicts are the caller's fault
/// (400), lookups of absent records are 404, and backend faults are 500.
pub fn status_for(err: &TaxonomyError) -> u16 {
    match err.kind() {
        ErrorKind::Validation
        | ErrorKind::ParentMissing
        | ErrorKind::AlreadyExists
        | ErrorKind::HasChildren => 400,
        ErrorKind::NotFound => 404,
        ErrorKind::Storage | ErrorKind::Unexpected => 500,
    }
}

/// Stateless request handler over a [`TaxonomyStore`].
///
/// Every invocation produces a well-formed [`AgentResponse`]; faults are
/// encoded as failed outcomes with a status code, never propagated.
pub struct AgentDispatcher<S> {
    taxonomy: TaxonomyStore<S>,
    config: AgentConfig,
}

impl<S: TableStore> AgentDispatcher<S> {
    /// Create a dispatcher over the given taxonomy store.
    pub fn new(taxonomy: TaxonomyStore<S>, config: AgentConfig) -> Self {
        Self { taxonomy, config }
    }

    /// The wrapped taxonomy store.
    pub fn taxonomy(&self) -> &TaxonomyStore<S> {
        &self.taxonomy
    }

    /// Handle one agent invocation.
    pub fn handle(&self, request: &AgentRequest) -> AgentResponse {
        let (status, body) = self.route(request);
        info!(api_path = %request.api_path, status, "handled agent invocation");
        AgentResponse::build(
            self.config.message_version.clone(),
            request
                .action_group
                .clone()
                .unwrap_or_else(|| self.config.action_group.clone()),
            request.api_path.clone(),
            request
                .http_method
                .clone()
                .unwrap_or_else(|| "POST".to_string()),
            status,
            body,
        )
    }

    fn route(&self, request: &AgentRequest) -> (u16, String) {
        let params = ParamMap::from_parameters(&request.parameters);
        let path = request.api_path.as_str();

        if path == ADD_PATH {
            return self.add(&params);
        }
        if path == DELETE_PATH {
            return self.delete(&params);
        }
        if path == CATEGORIES_PATH {
            return self.list_all();
        }
        if let Some(category) = single_segment(path) {
            return self.list_by_category(category);
        }

        (
            400,
            Outcome::fail(format!("invalid API path: {path}")).to_body(),
        )
    }

    fn add(&self, params: &ParamMap) -> (u16, String) {
        match self.taxonomy.add(&params.to_add_request()) {
            Ok(node) => {
                let message = if node.is_main() {
                    format!("Successfully added main category '{}'", node.category)
                } else {
                    format!(
                        "Successfully added subcategory '{}' under category '{}'",
                        node.subcategory, node.category
                    )
                };
                (200, Outcome::ok(message, Some(node)).to_body())
            }
            Err(err) => (status_for(&err), Outcome::fail(err.to_string()).to_body()),
        }
    }

    fn delete(&self, params: &ParamMap) -> (u16, String) {
        match self.taxonomy.delete(&params.to_delete_request()) {
            Ok(key) => {
                let message = if key.is_main() {
                    format!("Successfully deleted main category '{}'", key.category)
                } else {
                    format!(
                        "Successfully deleted subcategory '{}' from category '{}'",
                        key.subcategory, key.category
                    )
                };
                (200, Outcome::ok(message, None).to_body())
            }
            Err(err) => (status_for(&err), Outcome::fail(err.to_string()).to_body()),
        }
    }

    fn list_all(&self) -> (u16, String) {
        match self.taxonomy.list_all() {
            Ok(items) => (200, items_body(&items)),
            Err(err) => (status_for(&err), Outcome::fail(err.to_string()).to_body()),
        }
    }

    fn list_by_category(&self, category: &str) -> (u16, String) {
        match self.taxonomy.list_by_category(category) {
            Ok(items) => (200, items_body(&items)),
            Err(err) => (status_for(&err), Outcome::fail(err.to_string()).to_body()),
        }
    }
}

/// The category segment of `/categories/{name}`, if the path has exactly
/// one segment beyond the prefix.
fn single_segment(path: &str) -> Option<&str> {
    let rest = path.strip_prefix("/categories/")?;
    if rest.is_empty() || rest.contains('/') {
        return None;
    }
    Some(rest)
}

fn items_body(items: &[CategoryNode]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use taxa_store::InMemoryTableStore;

    use crate::envelope::Parameter;

    use super::*;

    fn dispatcher() -> AgentDispatcher<InMemoryTableStore> {
        AgentDispatcher::new(
            TaxonomyStore::new(InMemoryTableStore::new()),
            AgentConfig::default(),
        )
    }

    fn request(api_path: &str, parameters: Vec<Parameter>) -> AgentRequest {
        AgentRequest {
            message_version: "1.0".to_string(),
            api_path: api_path.to_string(),
            action_group: None,
            http_method: Some("POST".to_string()),
            parameters,
            input_text: None,
            session_id: None,
        }
    }

    fn add_main(dispatcher: &AgentDispatcher<InMemoryTableStore>, category: &str) {
        let response = dispatcher.handle(&request(
            ADD_PATH,
            vec![
                Parameter::string("category", category),
                Parameter::string("description", format!("{category} items")),
            ],
        ));
        assert_eq!(response.status(), 200);
    }

    #[test]
    fn add_main_category_produces_success_outcome() {
        let d = dispatcher();
        let response = d.handle(&request(
            ADD_PATH,
            vec![
                Parameter::string("category", "Electronics"),
                Parameter::string("description", "Electronic goods"),
            ],
        ));

        assert_eq!(response.status(), 200);
        let outcome: Outcome = serde_json::from_str(response.body()).unwrap();
        assert!(outcome.success);
        assert_eq!(
            outcome.message,
            "Successfully added main category 'electronics'"
        );
        assert_eq!(outcome.data.unwrap().level, 1);
    }

    #[test]
    fn add_with_missing_description_is_a_400() {
        let d = dispatcher();
        let response = d.handle(&request(
            ADD_PATH,
            vec![Parameter::string("category", "books")],
        ));

        assert_eq!(response.status(), 400);
        let outcome: Outcome = serde_json::from_str(response.body()).unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.message, "description is required");
    }

    #[test]
    fn duplicate_add_is_a_400() {
        let d = dispatcher();
        add_main(&d, "books");

        let response = d.handle(&request(
            ADD_PATH,
            vec![
                Parameter::string("category", "books"),
                Parameter::string("description", "again"),
            ],
        ));
        assert_eq!(response.status(), 400);
    }

    #[test]
    fn orphan_subcategory_add_is_a_400() {
        let d = dispatcher();
        let response = d.handle(&request(
            ADD_PATH,
            vec![
                Parameter::string("category", "electronics"),
                Parameter::string("subcategory", "mobiles"),
                Parameter::string("description", "Phones"),
            ],
        ));
        assert_eq!(response.status(), 400);
        assert!(response.body().contains("does not exist"));
    }

    #[test]
    fn nested_subcategory_level_is_inferred_through_the_envelope() {
        let d = dispatcher();
        add_main(&d, "electronics");

        let response = d.handle(&request(
            ADD_PATH,
            vec![
                Parameter::string("category", "electronics"),
                Parameter::string("subcategory", "mobiles:apple"),
                Parameter::string("description", "Apple phones"),
            ],
        ));
        let outcome: Outcome = serde_json::from_str(response.body()).unwrap();
        assert_eq!(outcome.data.unwrap().level, 3);
    }

    #[test]
    fn explicit_numeric_level_is_respected() {
        let d = dispatcher();
        add_main(&d, "electronics");

        let response = d.handle(&request(
            ADD_PATH,
            vec![
                Parameter::string("category", "electronics"),
                Parameter::string("subcategory", "mobiles"),
                Parameter::string("description", "Phones"),
                Parameter::number("level", 5),
            ],
        ));
        let outcome: Outcome = serde_json::from_str(response.body()).unwrap();
        assert_eq!(outcome.data.unwrap().level, 5);
    }

    #[test]
    fn list_all_returns_record_array() {
        let d = dispatcher();
        add_main(&d, "books");
        add_main(&d, "toys");

        let response = d.handle(&request(CATEGORIES_PATH, vec![]));
        assert_eq!(response.status(), 200);
        let items: Vec<CategoryNode> = serde_json::from_str(response.body()).unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn list_one_category_includes_the_main_record() {
        let d = dispatcher();
        add_main(&d, "electronics");
        d.handle(&request(
            ADD_PATH,
            vec![
                Parameter::string("category", "electronics"),
                Parameter::string("subcategory", "mobiles"),
                Parameter::string("description", "Phones"),
            ],
        ));

        let response = d.handle(&request("/categories/electronics", vec![]));
        assert_eq!(response.status(), 200);
        let items: Vec<CategoryNode> = serde_json::from_str(response.body()).unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().any(|n| n.is_main()));
    }

    #[test]
    fn unknown_category_fetch_is_a_404() {
        let d = dispatcher();
        let response = d.handle(&request("/categories/ghost", vec![]));
        assert_eq!(response.status(), 404);
        let outcome: Outcome = serde_json::from_str(response.body()).unwrap();
        assert_eq!(outcome.message, "category 'ghost' not found");
    }

    #[test]
    fn delete_main_with_children_is_a_400() {
        let d = dispatcher();
        add_main(&d, "electronics");
        d.handle(&request(
            ADD_PATH,
            vec![
                Parameter::string("category", "electronics"),
                Parameter::string("subcategory", "mobiles"),
                Parameter::string("description", "Phones"),
            ],
        ));

        let response = d.handle(&request(
            DELETE_PATH,
            vec![Parameter::string("categoryName", "electronics")],
        ));
        assert_eq!(response.status(), 400);
        assert!(response.body().contains("delete all subcategories first"));
    }

    #[test]
    fn delete_subcategory_then_main() {
        let d = dispatcher();
        add_main(&d, "electronics");
        d.handle(&request(
            ADD_PATH,
            vec![
                Parameter::string("category", "electronics"),
                Parameter::string("subcategory", "mobiles"),
                Parameter::string("description", "Phones"),
            ],
        ));

        let response = d.handle(&request(
            DELETE_PATH,
            vec![
                Parameter::string("categoryName", "electronics"),
                Parameter::string("subcategoryPath", "mobiles"),
            ],
        ));
        assert_eq!(response.status(), 200);
        let outcome: Outcome = serde_json::from_str(response.body()).unwrap();
        assert_eq!(
            outcome.message,
            "Successfully deleted subcategory 'mobiles' from category 'electronics'"
        );

        let response = d.handle(&request(
            DELETE_PATH,
            vec![Parameter::string("categoryName", "electronics")],
        ));
        assert_eq!(response.status(), 200);
    }

    #[test]
    fn delete_of_absent_subcategory_is_a_404() {
        let d = dispatcher();
        add_main(&d, "electronics");

        let response = d.handle(&request(
            DELETE_PATH,
            vec![
                Parameter::string("categoryName", "electronics"),
                Parameter::string("subcategoryPath", "ghost"),
            ],
        ));
        assert_eq!(response.status(), 404);
    }

    #[test]
    fn unknown_api_path_is_a_400() {
        let d = dispatcher();
        let response = d.handle(&request("/nonsense", vec![]));
        assert_eq!(response.status(), 400);
        assert!(response.body().contains("invalid API path"));
    }

    #[test]
    fn nested_path_segments_are_rejected() {
        let d = dispatcher();
        let response = d.handle(&request("/categories/a/b", vec![]));
        assert_eq!(response.status(), 400);
    }

    #[test]
    fn response_echoes_routing_fields() {
        let d = dispatcher();
        let mut req = request(CATEGORIES_PATH, vec![]);
        req.action_group = Some("getcategoryfunction".to_string());
        req.http_method = Some("GET".to_string());

        let response = d.handle(&req);
        assert_eq!(response.response.action_group, "getcategoryfunction");
        assert_eq!(response.response.http_method, "GET");
        assert_eq!(response.response.api_path, CATEGORIES_PATH);
    }
}
