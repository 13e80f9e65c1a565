use super::*;
use crate::test_support::{RecordingNavigator, settle_until, user};
use docent_core::route::Route;
use std::sync::Arc;

#[tokio::test]
async fn test_unresolved_session_blocks_without_error() {
    let context = AuthContext::new();
    let navigator = RecordingNavigator::new();
    let gate = Arc::new(SessionGate::new(&context, navigator.clone()));

    let waiter = {
        let gate = gate.clone();
        tokio::spawn(async move { gate.settle().await })
    };
    tokio::task::yield_now().await;

    assert!(!gate.is_resolved());
    assert!(!waiter.is_finished());
    assert!(navigator.routes().is_empty());

    context.resolve(Some(user()));
    let outcome = waiter.await.unwrap();
    assert_eq!(outcome, GateOutcome::Authenticated(user()));
    assert!(navigator.routes().is_empty());
}

#[tokio::test]
async fn test_signed_out_redirects_once_per_resolution() {
    let context = AuthContext::new();
    let navigator = RecordingNavigator::new();
    let gate = SessionGate::new(&context, navigator.clone());

    context.resolve(None);
    assert_eq!(gate.settle().await, GateOutcome::Redirected);
    assert_eq!(gate.settle().await, GateOutcome::Redirected);
    assert_eq!(navigator.routes(), vec![Route::Landing]);

    // A fresh resolution may redirect again.
    context.resolve(None);
    assert_eq!(gate.settle().await, GateOutcome::Redirected);
    assert_eq!(navigator.routes(), vec![Route::Landing, Route::Landing]);
}

#[tokio::test]
async fn test_invalidate_suspends_again() {
    let context = AuthContext::resolved(Some(user()));
    let navigator = RecordingNavigator::new();
    let gate = Arc::new(SessionGate::new(&context, navigator.clone()));
    assert!(gate.session().is_authenticated());

    context.invalidate();
    assert!(!gate.is_resolved());

    let waiter = {
        let gate = gate.clone();
        tokio::spawn(async move { gate.settle().await })
    };
    context.resolve(None);
    settle_until(|| waiter.is_finished()).await;
    assert_eq!(waiter.await.unwrap(), GateOutcome::Redirected);
    assert_eq!(navigator.routes(), vec![Route::Landing]);
}

#[tokio::test]
async fn test_dropped_provider_counts_as_signed_out() {
    let navigator = RecordingNavigator::new();
    let gate = {
        let context = AuthContext::new();
        SessionGate::new(&context, navigator.clone())
    };

    assert_eq!(gate.settle().await, GateOutcome::Redirected);
    assert_eq!(navigator.routes(), vec![Route::Landing]);
}
