use crate::modules::entries::adapters::outbound::raw_entries_in_memory::InMemoryRawEntries;
use crate::modules::entries::core::created_at::CreatedAt;
use crate::modules::entries::use_cases::list_entries::handler::ListEntriesHandler;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::raw_entries::{RAW_ENTRIES_JSON, RawEntryBuilder};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

#[tokio::test]
async fn serves_seeded_entries_through_the_router() {
    let source = Arc::new(
        InMemoryRawEntries::from_json_file(RAW_ENTRIES_JSON)
            .await
            .unwrap(),
    );
    source
        .insert(
            RawEntryBuilder::new()
                .id(4)
                .comment("late entry")
                .created_at("whenever")
                .build_value(),
        )
        .await;

    let handler = Arc::new(ListEntriesHandler::new(source.clone()));
    let expected = handler.list().await.unwrap();
    assert_eq!(expected.len(), 4);
    assert_eq!(expected[3].created_at, CreatedAt::Invalid);

    let response = router(AppState {
        list_entries: handler,
    })
    .oneshot(Request::get("/entries").body(Body::empty()).unwrap())
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json, serde_json::to_value(&expected).unwrap());
    assert_eq!(json[3]["comment"], "late entry");
    assert_eq!(json[3]["createdAt"], serde_json::Value::Null);
}
