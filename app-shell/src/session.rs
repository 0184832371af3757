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

use async_trait::async_trait;

///
/// [`Session`] is the capability through which requirements query the current user.
///
/// The shell never inspects credentials itself. Implementations may suspend while
/// session state loads (for example while a "who am I" call is in flight).
///
/// # Examples
///
/// ```
/// use app_shell::Session;
/// use async_trait::async_trait;
///
/// struct Anonymous;
///
/// #[async_trait]
/// impl Session for Anonymous {
///     async fn is_logged(&self) -> bool {
///         false
///     }
///
///     async fn is_admin(&self) -> bool {
///         false
///     }
/// }
/// ```
#[async_trait]
pub trait Session: Send + Sync {
    /// Returns `true` when a user is authenticated.
    async fn is_logged(&self) -> bool;

    /// Returns `true` when the authenticated user holds administrator rights.
    async fn is_admin(&self) -> bool;
}
