//! # Scooter Harness
//!
//! > **A conformance harness for the scooter rental REST backend.**
//!
//! The harness drives couriers and orders through their full lifecycle against a live
//! (or fake) backend and guarantees the backend is left the way it was found: every
//! resource a scenario manages to identify is deleted or finished, even when the
//! scenario fails half way.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One chain, written once
//! Both resources follow the same shape:
//!
//! ```text
//! create ──► public key ──resolve──► internal id ──► act ──► cleanup
//! ```
//!
//! An order is created, yields a *track number*, which is exchanged for an internal id,
//! which is finally used to finish it. A courier is created, its *login/password* are
//! exchanged for an id by logging in, and that id is used to delete it. The chain lives
//! in [`ResourceLifecycleClient`](framework::ResourceLifecycleClient) and
//! [`ResourceHandle`](framework::ResourceHandle); the resource clients only describe
//! their three calls.
//!
//! ### Cleanup is a scope guarantee
//! [`ResourceHandle`](framework::ResourceHandle) runs cleanup from `Drop`. A scenario
//! cannot forget it, and a failing assertion cannot skip it. Cleanup only ever runs with
//! an id that came back from a successful resolve: the sentinel `-1` is never sent.
//!
//! ## 🚀 Core Concepts
//!
//! ### Generics: The Power of `G`
//! Clients are generic over [`Gateway`](framework::Gateway). The same `OrderClient<G>`
//! runs over HTTP ([`ApiGateway`](framework::ApiGateway)) or in memory
//! ([`MockGateway`](framework::mock::MockGateway)).
//!
//! ### Mocking: Testing without a Backend
//! See the [`framework::mock`] module for a complete guide.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! [`HarnessError`](framework::HarnessError) names the step that broke: transport,
//! creation, resolution, cleanup, or a data contract. Expected-failure scenarios match on
//! the variant and read the backend's `message` verbatim.
//!
//! ### 2. Synchronous by Construction
//! Each call blocks until a response arrives or the configured timeout expires. A
//! scenario runs its chain to completion before the next one starts.
//!
//! ### 3. Observability
//! We use `tracing` everywhere with structured logging. See the [`lifecycle::tracing`]
//! module for details.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Gateway, lifecycle trait, handle and errors.
//! - **Key items**: [`ResourceLifecycleClient`](framework::ResourceLifecycleClient), [`ResourceHandle`](framework::ResourceHandle).
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! Configuration and wiring.
//! - **Key items**: [`HarnessConfig`](lifecycle::HarnessConfig), [`Harness`](lifecycle::Harness).
//!
//! ### 3. The Interface ([`clients`])
//! - **Key items**: [`OrderClient`](clients::OrderClient), [`CourierClient`](clients::CourierClient).
//!
//! ### 4. The Payloads ([`model`])
//! Request and response bodies, with the backend's field names.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Unit tests and the fake-backend suite
//! cargo test
//!
//! # Scenarios against the real backend
//! SCOOTER_BASE_URL=https://qa-scooter.praktikum-services.ru/ RUST_LOG=info cargo test -- --ignored
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
