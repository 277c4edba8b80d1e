//! The documentation categories compiled into this crate.

use crate::error::Result;
use crate::manifest::index::Manifest;
use crate::manifest::model::Category;
use std::sync::OnceLock;

struct BuiltinCategory {
    name: &'static str,
    path: &'static str,
    files: &'static [&'static str],
}

// Declaration order is navigation order.
const BUILTIN: &[BuiltinCategory] = &[
    BuiltinCategory {
        name: "Backend Intro",
        path: "BackendIntro",
        files: &[
            "Backend.md",
            "BackendRoadmap.md",
            "CORS.md",
            "fsModule.md",
            "REST_API.md",
        ],
    },
    BuiltinCategory {
        name: "Auth & OAuth",
        path: "AuthAndOAuth",
        files: &["MailSending.md", "OAuthAndProfessionalMailSending.md"],
    },
    BuiltinCategory {
        name: "Caching Using Redis",
        path: "CachingUsingRedis",
        files: &["Redis.md"],
    },
    BuiltinCategory {
        name: "Data Modelling",
        path: "DataModelling",
        files: &["DataModelling.md"],
    },
    BuiltinCategory {
        name: "Data Streaming",
        path: "DataStreaming",
        files: &["Stream.md"],
    },
    BuiltinCategory {
        name: "Location Module",
        path: "LocationModule",
        files: &["LocationTracking.md"],
    },
    BuiltinCategory {
        name: "Mega Project (YouTube)",
        path: "MegaProjectYoutube",
        files: &["MegaprojectNotesOne.md", "MegaProjectTwo.md"],
    },
    BuiltinCategory {
        name: "Payment Integration",
        path: "PaymentIntegration",
        files: &["PaymentIntegration.md"],
    },
    BuiltinCategory {
        name: "Task Scheduling",
        path: "TaskScheduling",
        files: &["TaskScheduling.md"],
    },
    BuiltinCategory {
        name: "Validations (Zod & Joi)",
        path: "ValidationsUsingZodAndJoi",
        files: &["ValidationsUsingValidators.md"],
    },
    BuiltinCategory {
        name: "WebSockets",
        path: "WebSockets",
        files: &["SocketIO.md"],
    },
];

static MANIFEST: OnceLock<Result<Manifest>> = OnceLock::new();

/// Owned copies of the built-in categories, unvalidated.
pub fn builtin_categories() -> Vec<Category> {
    BUILTIN
        .iter()
        .map(|entry| Category::new(entry.name, entry.path, entry.files.iter().copied()))
        .collect()
}

/// The process-wide built-in manifest.
///
/// Validation runs once, on first call; later calls return the same instance
/// (or the same error). Binaries call this at startup so a malformed table
/// stops the process before any lookup happens.
pub fn builtin() -> Result<&'static Manifest> {
    MANIFEST
        .get_or_init(|| Manifest::from_categories(builtin_categories()))
        .as_ref()
        .map_err(Clone::clone)
}
