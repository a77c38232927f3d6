use std::sync::Arc;
use std::thread;

use actix_web::{test as actix_test, web::Data, App};
use expedition_server::auth::{
    routes::check::check, routes::whoami::whoami, Identity, Role, Session, SessionRegistry,
};

fn leader_7() -> Identity {
    Identity {
        user_id: 7,
        role: Role::Leader,
    }
}

#[test]
fn unknown_tokens_are_rejected() {
    let registry = SessionRegistry::new();

    assert!(!registry.has("T2"));
    assert!(!registry.has(""));

    let err = registry.resolve("T2").unwrap_err();
    assert_eq!(err.token, "T2");
}

#[test]
fn inserted_token_resolves_to_its_identity() {
    let registry = SessionRegistry::new();
    registry.insert(Session::with_token("T1", leader_7()));

    assert!(registry.has("T1"));
    let identity = registry.resolve("T1").unwrap();
    assert_eq!(identity.user_id, 7);
    assert_eq!(identity.role, Role::Leader);

    assert!(!registry.has("T2"));
    assert!(registry.resolve("T2").is_err());
}

#[test]
fn has_is_stable_without_writes() {
    let registry = SessionRegistry::new();
    registry.insert(Session::with_token("T1", leader_7()));

    for _ in 0..100 {
        assert!(registry.has("T1"));
        assert!(!registry.has("T2"));
    }
}

#[test]
fn factory_binds_the_identity_for_each_role() {
    for (tag, role) in [
        ("member", Role::Member),
        ("leader", Role::Leader),
        ("admin", Role::Admin),
    ] {
        let session = Session::from_tag(tag, 42).unwrap();
        assert_eq!(session.identity().role, role);
        assert_eq!(session.identity().user_id, 42);
    }
}

#[test]
fn factory_mints_distinct_tokens() {
    let a = Session::new(leader_7());
    let b = Session::new(leader_7());
    assert_ne!(a.token(), b.token());
}

#[test]
fn unrecognized_role_tag_fails_construction() {
    for tag in ["curator", "Leader", "", "root"] {
        let err = Session::from_tag(tag, 1).unwrap_err();
        assert_eq!(err.tag, tag);
    }
}

// one writer, many readers; every reader sees either nothing or the complete
// session, never a half-written one
#[test]
fn concurrent_lookups_never_observe_a_torn_session() {
    let registry = Arc::new(SessionRegistry::new());

    let readers: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for _ in 0..10_000 {
                    match registry.resolve("T1") {
                        Ok(identity) => {
                            assert_eq!(identity.user_id, 7);
                            assert_eq!(identity.role, Role::Leader);
                        }
                        Err(err) => assert_eq!(err.token, "T1"),
                    }
                }
            })
        })
        .collect();

    let writer = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || {
            registry.insert(Session::with_token("T1", leader_7()));
        })
    };

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(registry.resolve("T1").unwrap().user_id, 7);
}

#[actix_rt::test]
async fn auth_gate_rejects_unknown_tokens_over_http() {
    let sessions = Data::new(SessionRegistry::new());
    let token = sessions.start_session(leader_7());

    let app = actix_test::init_service(
        App::new()
            .app_data(Data::clone(&sessions))
            .service(check)
            .service(whoami),
    )
    .await;

    // live session passes the gate
    let req = actix_test::TestRequest::get()
        .uri(&format!("/auth/check?token={}", token))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    // unknown token is a client error, not a fault
    let req = actix_test::TestRequest::get()
        .uri("/auth/check?token=nope")
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401);

    // missing token parameter entirely
    let req = actix_test::TestRequest::get().uri("/auth/check").to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401);
}

#[actix_rt::test]
async fn whoami_reports_the_resolved_identity() {
    let sessions = Data::new(SessionRegistry::new());
    let token = sessions.start_session(leader_7());

    let app = actix_test::init_service(
        App::new()
            .app_data(Data::clone(&sessions))
            .service(whoami),
    )
    .await;

    let req = actix_test::TestRequest::get()
        .uri(&format!("/auth/whoami?token={}", token))
        .to_request();
    let identity: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(identity["user_id"], 7);
    assert_eq!(identity["role"], "leader");

    let req = actix_test::TestRequest::get()
        .uri("/auth/whoami?token=stale")
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401);
}
