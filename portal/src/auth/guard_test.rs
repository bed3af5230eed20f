use std::cell::RefCell;
use std::collections::BTreeSet;

use leptos::reactive::owner::Owner;

use super::*;
use crate::auth::redirect::{PENDING_REDIRECT_KEY, RedirectStore};
use crate::auth::testing::{FakeProvider, Harness};
use crate::state::session::Identity;

#[test]
fn loading_session_waits() {
    assert_eq!(GuardOutcome::for_session(&Session::Loading), GuardOutcome::Waiting);
}

#[test]
fn signed_out_session_requires_login() {
    assert_eq!(GuardOutcome::for_session(&Session::Unauthenticated), GuardOutcome::LoginRequired);
}

#[test]
fn signed_in_session_is_granted() {
    let session = Session::Authenticated {
        identity: Identity {
            id: "u-1".to_owned(),
            username: "alice".to_owned(),
            email: String::new(),
            first_name: None,
            last_name: None,
            roles: BTreeSet::new(),
        },
        token: "tok".to_owned(),
    };
    assert_eq!(GuardOutcome::for_session(&session), GuardOutcome::Granted);
}

#[test]
fn login_click_saves_route_and_logs_in_once() {
    Owner::new().with(|| {
        let mut h = Harness::new(FakeProvider::signed_out());
        h.pool.run_until(h.manager.initialize());
        let auth = SessionContext::attach(h.manager.clone());

        login_from(auth, "/game/tower-wars");

        assert_eq!(h.provider.logins.borrow().len(), 1);
        assert_eq!(h.store.get(PENDING_REDIRECT_KEY).as_deref(), Some("/game/tower-wars"));

        login_from(auth, "/game/tower-wars");
        assert_eq!(h.provider.logins.borrow().len(), 2);
    });
}

#[test]
fn close_navigates_to_root() {
    let visited = RefCell::new(Vec::new());
    close_to_root(&|path: &str, options: NavigateOptions| visited.borrow_mut().push((path.to_owned(), options.replace)));
    assert_eq!(visited.into_inner(), vec![(ROOT_PATH.to_owned(), false)]);
}
