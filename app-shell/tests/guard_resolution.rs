/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

mod support;

use app_shell::{
    BuiltinRequirement, GuardOutcome, GuardRequest, ResolveError, Session,
};
use integration_test_utils::StaticSession;
use support::make_shell;

#[tokio::test]
async fn empty_request_is_always_allowed() {
    integration_test_utils::init_logging();

    let shell = make_shell("guard-empty");
    let session = StaticSession::anonymous();

    let outcome = shell
        .resolver()
        .resolve(&GuardRequest::none(), &session)
        .await;

    assert_eq!(outcome, Ok(GuardOutcome::Allowed));
    assert_eq!(session.queries(), 0);
}

#[tokio::test]
async fn first_failing_requirement_is_the_reason() {
    integration_test_utils::init_logging();

    let shell = make_shell("guard-first-failure");
    let sessions = [
        (StaticSession::anonymous(), GuardOutcome::Denied("logged".to_string())),
        (StaticSession::logged_in(), GuardOutcome::Denied("admin".to_string())),
        (StaticSession::administrator(), GuardOutcome::Allowed),
    ];
    let request = GuardRequest::from_names(["logged", "admin"]);

    for (session, expected) in sessions {
        let outcome = shell.resolver().resolve(&request, &session).await;
        assert_eq!(outcome, Ok(expected));
    }
}

#[tokio::test]
async fn evaluation_stops_at_first_denial() {
    integration_test_utils::init_logging();

    let shell = make_shell("guard-short-circuit");
    let session = StaticSession::anonymous();

    // "unregistered" is never reached, so it is not reported.
    let request = GuardRequest::from_names(["logged", "admin", "unregistered"]);
    let outcome = shell.resolver().resolve(&request, &session).await;

    assert_eq!(outcome, Ok(GuardOutcome::Denied("logged".to_string())));
    assert_eq!(session.queries(), 1);
}

#[tokio::test]
async fn unregistered_requirement_is_an_error_not_a_denial() {
    integration_test_utils::init_logging();

    let shell = make_shell("guard-unknown");
    let session = StaticSession::anonymous();

    let outcome = shell
        .resolver()
        .resolve(&GuardRequest::from("unregistered"), &session)
        .await;

    assert_eq!(
        outcome,
        Err(ResolveError::UnknownRequirement("unregistered".to_string()))
    );
}

#[tokio::test]
async fn logged_in_user_is_denied_notlogged_pages_away_from_login() {
    integration_test_utils::init_logging();

    let shell = make_shell("guard-notlogged");
    let session = StaticSession::logged_in();

    let outcome = shell
        .resolver()
        .resolve(&GuardRequest::from(BuiltinRequirement::NotLogged), &session)
        .await
        .unwrap();

    assert_eq!(outcome, GuardOutcome::Denied("notlogged".to_string()));
    let fallback = shell
        .navigator()
        .fallbacks()
        .fallback_for(outcome.denied_reason().unwrap())
        .unwrap();
    assert_ne!(fallback, "/accounts/login");
}

#[tokio::test]
async fn builtin_predicates_follow_session_state() {
    integration_test_utils::init_logging();

    let shell = make_shell("guard-builtin");
    let session = StaticSession::anonymous();

    for requirement in BuiltinRequirement::ALL {
        let request = GuardRequest::from(requirement);
        let before = shell.resolver().resolve(&request, &session).await.unwrap();

        session.set_logged(true);
        let after = shell.resolver().resolve(&request, &session).await.unwrap();
        session.set_logged(false);

        let expected = match requirement {
            BuiltinRequirement::NotLogged => (true, false),
            BuiltinRequirement::Logged => (false, true),
            BuiltinRequirement::Admin => (false, false),
        };
        assert_eq!(
            (before.is_allowed(), after.is_allowed()),
            expected,
            "unexpected outcome for {requirement}"
        );
    }

    assert!(!session.is_admin().await);
}
