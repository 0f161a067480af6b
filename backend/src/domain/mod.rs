//! Domain primitives, services and ports.
//!
//! Purpose: hold the employee model and the rules applied to it, free of
//! HTTP and database concerns. Adapters in `inbound` and `outbound` depend on
//! this module, never the other way round.
//!
//! Public surface:
//! - **Employee, EmployeeDetails, EmployeeId**: the persisted record and its parts.
//! - **EmployeeService**: the domain service implementing the driving ports.
//! - **Error, ErrorCode**: transport-agnostic failures.
//! - **TraceId**: request correlation identifier.

pub mod employee;
mod employee_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::employee::{Employee, EmployeeDetails, EmployeeId};
pub use self::employee_service::EmployeeService;
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;
