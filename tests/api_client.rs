mod common;

#[cfg(test)]
mod tests {
    use super::common::{MockTransport, SPACE_URL};
    use lp_time::api::{LiquidPlanner, Method};
    use lp_time::libs::credential::Credential;
    use lp_time::libs::error::LpError;
    use serde_json::json;
    use std::collections::BTreeMap;
    use std::path::Path;

    const TOKEN_PATH: &str = "/home/dev/.lp-time/auth-token";

    fn client(transport: &MockTransport) -> LiquidPlanner<&MockTransport> {
        let mut client = LiquidPlanner::new(Credential::new("secret-token", TOKEN_PATH), transport, SPACE_URL);
        client.set_workspace_id(55);
        client
    }

    fn query(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[tokio::test]
    async fn test_every_request_carries_bearer_and_json_headers() {
        let transport = MockTransport::new().with(Method::Get, "/account", 200, json!({"id": 7}));
        let client = client(&transport);

        client.account().await.unwrap();
        client.post("/workspaces/55/tasks", json!({})).await.unwrap();
        client.put("/workspaces/55/tasks/1", json!({"name": "x"})).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 3);
        for request in requests {
            assert_eq!(request.header("Authorization"), Some("Bearer secret-token"));
            assert_eq!(request.header("content-type"), Some("application/json"));
        }
    }

    #[tokio::test]
    async fn test_raw_verbs_return_response_untouched() {
        let transport = MockTransport::new().with_raw(Method::Get, "/account", 503, "maintenance");
        let client = client(&transport);

        let response = client.get("/account").await.unwrap();
        assert_eq!(response.status, 503);
        assert_eq!(response.body, "maintenance");
    }

    #[tokio::test]
    async fn test_validate_accepts_200() {
        let transport = MockTransport::new().with(Method::Get, "/account", 200, json!({"id": 7}));
        assert!(client(&transport).validate().await.is_ok());
    }

    #[tokio::test]
    async fn test_validate_rejection_names_credential_file() {
        let transport = MockTransport::new().with(Method::Get, "/account", 401, json!({"error": "Unauthorized"}));

        let err = client(&transport).validate().await.unwrap_err();

        match &err {
            LpError::Authentication(path) => assert_eq!(path, Path::new(TOKEN_PATH)),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains(TOKEN_PATH));
    }

    #[tokio::test]
    async fn test_workspace_scoped_call_needs_workspace() {
        let transport = MockTransport::new();
        let unbound = LiquidPlanner::new(Credential::new("t", TOKEN_PATH), &transport, SPACE_URL);

        assert!(unbound.workspace_id().is_none());
        assert!(matches!(unbound.tasks().await, Err(LpError::WorkspaceNotSelected)));
        assert!(matches!(unbound.task_url(1), Err(LpError::WorkspaceNotSelected)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_workspace_resources_use_workspace_paths() {
        let transport = MockTransport::new()
            .with(Method::Get, "/workspaces", 200, json!([{"id": 55, "name": "Acme"}, {"id": 56, "name": "Side"}]))
            .with(Method::Get, "/workspaces/55/projects", 200, json!([{"id": 3, "name": "Website"}]))
            .with(Method::Get, "/workspaces/55/tasks", 200, json!([{"id": 9, "name": "Deploy", "is_done": true}]))
            .with(Method::Get, "/workspaces/55/members", 200, json!([{"id": 7, "user_name": "dev"}]));
        let client = client(&transport);

        assert_eq!(client.workspaces().await.unwrap()[0].name, "Acme");
        assert_eq!(client.projects().await.unwrap()[0].name, "Website");
        assert!(client.tasks().await.unwrap()[0].is_done);
        assert_eq!(client.members().await.unwrap()[0].default_activity_id, None);
    }

    #[tokio::test]
    async fn test_fuzzy_search_sends_filters_and_orders_most_recent_first() {
        let transport = MockTransport::new().with(
            Method::Get,
            "/workspaces/55/tasks",
            200,
            json!([
                {"id": 1, "name": "Fix login bug (old)", "updated_at": "2024-01-02T10:00:00Z"},
                {"id": 2, "name": "Fix login bug", "updated_at": "2024-03-05T08:30:00Z"},
                {"id": 3, "name": "Fix login bug v2", "updated_at": "2024-02-11T16:45:00Z"}
            ]),
        );
        let client = client(&transport);

        let tasks = client.find_tasks_by_fuzzy_name("fix-login-bug").await.unwrap();

        let ids: Vec<u64> = tasks.iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        let request = &transport.requests()[0];
        assert_eq!(
            request.query,
            query(&[
                ("filter[]", "name contains fix-login-bug"),
                ("filter[]", "is_done is false"),
                ("order", "updated_at"),
            ])
        );
    }

    #[tokio::test]
    async fn test_fuzzy_search_orders_by_instant_not_text() {
        let transport = MockTransport::new().with(
            Method::Get,
            "/workspaces/55/tasks",
            200,
            json!([
                {"id": 1, "name": "Fix login bug", "updated_at": "2024-03-05T08:30:00.500Z"},
                {"id": 2, "name": "Fix login bug v2", "updated_at": "2024-03-05T08:30:00Z"},
                {"id": 3, "name": "Fix login bug v3", "updated_at": "2024-03-05T09:00:00+01:00"},
                {"id": 4, "name": "Fix login bug v4"}
            ]),
        );
        let client = client(&transport);

        let tasks = client.find_tasks_by_fuzzy_name("fix-login-bug").await.unwrap();

        let ids: Vec<u64> = tasks.iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_fuzzy_search_keeps_server_order_for_opaque_timestamps() {
        let transport = MockTransport::new().with(
            Method::Get,
            "/workspaces/55/tasks",
            200,
            json!([
                {"id": 101, "name": "Fix login bug", "updated_at": "t2"},
                {"id": 88, "name": "Fix login bug v2", "updated_at": "t1"}
            ]),
        );
        let client = client(&transport);

        let tasks = client.find_tasks_by_fuzzy_name("fix-login-bug").await.unwrap();

        assert_eq!(tasks[0].id, 101);
        assert_eq!(tasks[1].id, 88);
    }

    #[tokio::test]
    async fn test_exact_search_uses_equality_filter() {
        let transport = MockTransport::new().with(Method::Get, "/workspaces/55/tasks", 200, json!([]));
        let client = client(&transport);

        let tasks = client.find_tasks_by_exact_name("Fix login bug").await.unwrap();

        assert!(tasks.is_empty());
        assert_eq!(transport.requests()[0].query[0], ("filter[]".to_string(), "name = Fix login bug".to_string()));
    }

    #[tokio::test]
    async fn test_retrieve_activities_maps_names_to_ids() {
        let transport = MockTransport::new().with(
            Method::Get,
            "/workspaces/55/activities",
            200,
            json!([{"id": 1, "name": "Dev"}, {"id": 2, "name": "QA"}]),
        );

        let activities = client(&transport).retrieve_activities().await.unwrap();

        assert_eq!(activities, BTreeMap::from([("Dev".to_string(), 1), ("QA".to_string(), 2)]));
    }

    #[tokio::test]
    async fn test_retrieve_activities_last_duplicate_wins() {
        let transport = MockTransport::new().with(
            Method::Get,
            "/workspaces/55/activities",
            200,
            json!([{"id": 1, "name": "Dev"}, {"id": 4, "name": "Dev"}]),
        );

        let activities = client(&transport).retrieve_activities().await.unwrap();
        assert_eq!(activities.get("Dev"), Some(&4));
    }

    #[tokio::test]
    async fn test_default_activity_lookup() {
        let transport = MockTransport::new().with(
            Method::Get,
            "/workspaces/55/members",
            200,
            json!([
                {"id": 7, "default_activity_id": 3},
                {"id": 8, "default_activity_id": null}
            ]),
        );
        let client = client(&transport);

        assert_eq!(client.retrieve_default_activity_id(7).await.unwrap(), 3);
        assert!(matches!(
            client.retrieve_default_activity_id(8).await,
            Err(LpError::DefaultActivityNotFound(8))
        ));
        assert!(matches!(
            client.retrieve_default_activity_id(99).await,
            Err(LpError::DefaultActivityNotFound(99))
        ));
    }

    #[tokio::test]
    async fn test_track_time_posts_time_entry() {
        let transport = MockTransport::new().with(
            Method::Post,
            "/workspaces/55/tasks/42/track_time",
            200,
            json!({"id": 42, "name": "Fix login bug"}),
        );

        let task = client(&transport).track_time(3, 42, 2.5).await.unwrap();

        assert_eq!(task.id, 42);
        let requests = transport.requests_to(Method::Post, "/workspaces/55/tasks/42/track_time");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].body, Some(json!({"activity_id": 3, "work": "2.5", "is_done": false})));
    }

    #[tokio::test]
    async fn test_create_task_posts_name() {
        let transport =
            MockTransport::new().with(Method::Post, "/workspaces/55/tasks", 201, json!({"id": 77, "name": "New task"}));

        let task = client(&transport).create_task("New task").await.unwrap();

        assert_eq!(task.id, 77);
        assert_eq!(transport.requests()[0].body, Some(json!({"name": "New task"})));
    }

    #[tokio::test]
    async fn test_task_url_points_at_web_ui() {
        let transport = MockTransport::new();
        assert_eq!(
            client(&transport).task_url(101).unwrap(),
            "http://lp.test/space/55/projects/show/101"
        );
    }

    #[tokio::test]
    async fn test_error_status_becomes_api_error() {
        let transport = MockTransport::new().with(Method::Get, "/workspaces/55/activities", 500, json!({}));

        let err = client(&transport).activities().await.unwrap_err();
        assert!(matches!(err, LpError::Api { status: 500, ref path } if path == "/workspaces/55/activities"));
    }

    #[tokio::test]
    async fn test_malformed_body_becomes_decode_error() {
        let transport = MockTransport::new().with_raw(Method::Get, "/workspaces", 200, "<html>oops</html>");

        let err = client(&transport).workspaces().await.unwrap_err();
        assert!(matches!(err, LpError::Decode { .. }));
    }
}
