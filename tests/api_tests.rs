use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};

use coursepick::api_json::sample_schedule;
use coursepick::server::{configure, AppState, USER_HEADER};
use coursepick::store::{MemoryStore, ScheduleStore};

fn state_with(store: Arc<MemoryStore>) -> web::Data<AppState> {
    web::Data::new(AppState::new(store, 3))
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(App::new().app_data($state.clone()).configure(configure)).await
    };
}

#[actix_web::test]
async fn test_session_loading_and_welcome() {
    let empty = state_with(Arc::new(MemoryStore::empty()));
    let app = app!(empty);
    let resp: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/session").to_request()).await;
    assert_eq!(resp["title"], "[loading...]");
    assert_eq!(resp["welcome"], Value::Null);
    assert_eq!(resp["signed_in"], false);

    let loaded = state_with(Arc::new(MemoryStore::with_document(sample_schedule())));
    let app = app!(loaded);
    let req = test::TestRequest::get().uri("/session").insert_header((USER_HEADER, "Ada")).to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["title"], "CS Courses for 2018-2019");
    assert_eq!(resp["welcome"], "Welcome, Ada");
    assert_eq!(resp["signed_in"], true);
}

#[actix_web::test]
async fn test_schedule_not_loaded() {
    let state = state_with(Arc::new(MemoryStore::empty()));
    let app = app!(state);
    let resp = test::call_service(&app, test::TestRequest::get().uri("/schedule").to_request()).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[actix_web::test]
async fn test_schedule_is_enriched() {
    let state = state_with(Arc::new(MemoryStore::with_document(sample_schedule())));
    let app = app!(state);
    let resp: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/schedule").to_request()).await;
    let courses = resp["courses"].as_array().unwrap();
    assert_eq!(courses.len(), 4);
    assert_eq!(courses[0]["term"], "Fall");
    assert_eq!(courses[0]["number"], "101");
    assert_eq!(courses[0]["days"], json!(["M", "W", "F"]));
    assert_eq!(courses[0]["start"], 660);
    assert_eq!(courses[0]["end"], 710);
    assert_eq!(courses[3]["days"], json!(["Tu", "Th"]));
}

#[actix_web::test]
async fn test_terms() {
    let state = state_with(Arc::new(MemoryStore::empty()));
    let app = app!(state);
    let resp: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/terms").to_request()).await;
    assert_eq!(resp["terms"], json!(["Fall", "Winter", "Spring"]));
    assert_eq!(resp["default"], "Fall");
}

#[actix_web::test]
async fn test_courses_views() {
    let mut doc = sample_schedule();
    doc.courses.push(coursepick::models::CourseRecord {
        id: "F300".to_string(),
        title: "Clash".to_string(),
        meets: Some("MW 11:30-12:30".to_string()),
    });
    let state = state_with(Arc::new(MemoryStore::with_document(doc)));
    let app = app!(state);

    let req = test::TestRequest::get().uri("/courses?term=Fall&selected=F101").to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["selected"], json!(["F101"]));
    let courses = resp["courses"].as_array().unwrap();
    let clash = courses.iter().find(|c| c["id"] == "F300").unwrap();
    assert_eq!(clash["disabled"], true);
    assert_eq!(clash["editable"], false);

    let bad_term = test::call_service(&app, test::TestRequest::get().uri("/courses?term=Summer").to_request()).await;
    assert_eq!(bad_term.status(), StatusCode::BAD_REQUEST);

    let unknown = test::call_service(&app, test::TestRequest::get().uri("/courses?selected=Z999").to_request()).await;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_toggle_adds_removes_and_blocks_conflicts() {
    let mut doc = sample_schedule();
    doc.courses.push(coursepick::models::CourseRecord {
        id: "F300".to_string(),
        title: "Clash".to_string(),
        meets: Some("MW 11:30-12:30".to_string()),
    });
    let state = state_with(Arc::new(MemoryStore::with_document(doc)));
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/selection/toggle")
        .set_json(json!({"selected": ["F101"], "course": "F110"}))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["selected"], json!(["F110", "F101"]));
    assert_eq!(resp["term"], "Fall");

    let req = test::TestRequest::post()
        .uri("/selection/toggle")
        .set_json(json!({"selected": ["F110", "F101"], "course": "F101"}))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["selected"], json!(["F110"]));

    let req = test::TestRequest::post()
        .uri("/selection/toggle")
        .set_json(json!({"selected": ["F101"], "course": "F300"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn test_validate_selection() {
    let mut doc = sample_schedule();
    doc.courses.push(coursepick::models::CourseRecord {
        id: "F300".to_string(),
        title: "Clash".to_string(),
        meets: Some("MW 11:30-12:30".to_string()),
    });
    let state = state_with(Arc::new(MemoryStore::with_document(doc)));
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/selection/validate")
        .set_json(json!({"selected": ["F101", "F110", "F111", "F211"]}))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["conflict_free"], true);

    let req = test::TestRequest::post()
        .uri("/selection/validate")
        .set_json(json!({"selected": ["F101", "F300"]}))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["conflict_free"], false);
    assert_eq!(resp["conflicts"], json!([["F101", "F300"]]));
}

#[actix_web::test]
async fn test_update_meets() {
    let store = Arc::new(MemoryStore::with_document(sample_schedule()));
    let state = state_with(store.clone());
    let app = app!(state);

    // anónimo
    let req = test::TestRequest::put()
        .uri("/courses/F101/meets")
        .set_json(json!({"meets": "TuTh 9:00-10:20"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    // horario inválido -> el cliente debe volver a preguntar
    let req = test::TestRequest::put()
        .uri("/courses/F101/meets")
        .insert_header((USER_HEADER, "Ada"))
        .set_json(json!({"meets": "Monday 10-11"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["retry"], true);

    // curso inexistente
    let req = test::TestRequest::put()
        .uri("/courses/Z999/meets")
        .insert_header((USER_HEADER, "Ada"))
        .set_json(json!({"meets": "M 9:00-9:50"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["notification"].as_str().unwrap().contains("Z999"));

    // ok
    let req = test::TestRequest::put()
        .uri("/courses/F101/meets")
        .insert_header((USER_HEADER, "Ada"))
        .set_json(json!({"meets": "TuTh 9:00-10:20"}))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["status"], "ok");
    assert_eq!(resp["course"]["days"], json!(["Tu", "Th"]));
    assert_eq!(store.snapshot().unwrap().course("F101").unwrap().meets.as_deref(), Some("TuTh 9:00-10:20"));

    // el horario servido ya refleja el cambio
    let resp: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/schedule").to_request()).await;
    assert_eq!(resp["courses"][0]["start"], 540);
}
