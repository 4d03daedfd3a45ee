/*
 * Responsibility
 * - Middleware entry points; each module exposes `apply(router, ...)`
 * - auth: bearer-token gate (prefix form + single-route form)
 * - http / cors / security_headers: transport plumbing shared by every route
 */
pub mod auth;
pub mod cors;
pub mod http;
pub mod security_headers;
