//! Explain registry for rules and codes.
//!
//! Maps rule IDs and diagnostic codes to human-readable explanations with
//! remediation guidance. The long-form advice lives here, not in diagnostic
//! messages, so messages stay short and stable.

use crate::ids;

/// Explanation entry for a rule or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule/code.
    pub title: &'static str,
    /// What the rule enforces and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after examples.
    pub examples: ExamplePair,
}

/// Before and after examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Input that would trigger a diagnostic.
    pub before: &'static str,
    /// Input that passes the rule.
    pub after: &'static str,
}

/// Look up an explanation by rule_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    // Try rule_id first, then code
    match identifier {
        // Rule IDs
        ids::RULE_ENDPOINT_STRUCTURAL | ids::RULE_POLICY_STRUCTURAL | ids::RULE_SCHEME_STRUCTURAL => {
            Some(explain_structural())
        }
        ids::RULE_ENDPOINT_PLACEMENT | ids::RULE_POLICY_PLACEMENT | ids::RULE_SCHEME_PLACEMENT => {
            Some(explain_placement())
        }
        ids::RULE_ENDPOINT_ACTIVITY => Some(explain_activity_required()),
        ids::RULE_ENDPOINT_ROUTE_SHAPE => Some(explain_route_shape()),
        ids::RULE_ENDPOINT_PATH_PARAMS => Some(explain_path_params()),
        ids::RULE_ENDPOINT_BASE_PREFIX => Some(explain_base_prefix()),
        ids::RULE_ENDPOINT_LOCATION => Some(explain_location()),
        ids::RULE_ENDPOINT_AUTH_POLICY => Some(explain_auth_policy_ref()),
        ids::RULE_POLICY_NAMING | ids::RULE_SCHEME_NAMING => Some(explain_naming_prefix()),
        ids::RULE_ENDPOINT_METHOD_NAME | ids::RULE_POLICY_METHOD_NAME
        | ids::RULE_SCHEME_METHOD_NAME => Some(explain_method_name()),
        ids::RULE_ENDPOINT_GROUP_KEY | ids::RULE_POLICY_GROUP_KEY | ids::RULE_SCHEME_GROUP_KEY => {
            Some(explain_group_key())
        }
        ids::RULE_CONFIG_SETTINGS => Some(explain_config_settings()),

        // Codes
        ids::CODE_PARAMETER_IN_PATH => Some(explain_path_params()),
        ids::CODE_UNUSED_JUSTIFICATION => Some(explain_unused_justification()),
        ids::CODE_PREFIX_TRAILING_SLASH => Some(explain_config_settings()),
        ids::CODE_WRONG_TYPE_FOR_PATH => Some(explain_location()),
        ids::CODE_UNSUPPORTED_METHOD => Some(explain_route_shape()),

        _ => None,
    }
}

/// List all published rule IDs.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[
        ids::RULE_ENDPOINT_STRUCTURAL,
        ids::RULE_ENDPOINT_PLACEMENT,
        ids::RULE_ENDPOINT_ACTIVITY,
        ids::RULE_ENDPOINT_ROUTE_SHAPE,
        ids::RULE_ENDPOINT_PATH_PARAMS,
        ids::RULE_ENDPOINT_BASE_PREFIX,
        ids::RULE_ENDPOINT_LOCATION,
        ids::RULE_ENDPOINT_AUTH_POLICY,
        ids::RULE_ENDPOINT_METHOD_NAME,
        ids::RULE_ENDPOINT_GROUP_KEY,
        ids::RULE_POLICY_STRUCTURAL,
        ids::RULE_POLICY_PLACEMENT,
        ids::RULE_POLICY_NAMING,
        ids::RULE_POLICY_METHOD_NAME,
        ids::RULE_POLICY_GROUP_KEY,
        ids::RULE_SCHEME_STRUCTURAL,
        ids::RULE_SCHEME_PLACEMENT,
        ids::RULE_SCHEME_NAMING,
        ids::RULE_SCHEME_METHOD_NAME,
        ids::RULE_SCHEME_GROUP_KEY,
        ids::RULE_CONFIG_SETTINGS,
    ]
}

fn explain_structural() -> Explanation {
    Explanation {
        title: "Required declaration modifiers",
        description: "\
Registered types must be public partial classes and the annotated method must be
public static. The generated registration unit extends the type from another
file and references the method without an instance, so anything less simply
does not compile once generation runs.",
        remediation: "Add the missing `public`, `static`, or `partial` modifier.",
        examples: ExamplePair {
            before: "internal class EndpointCancel { static void Execute() {} }",
            after: "public partial class EndpointCancel { public static void Execute() {} }",
        },
    }
}

fn explain_placement() -> Explanation {
    Explanation {
        title: "Reserved namespace placement",
        description: "\
Each annotation kind owns one reserved namespace under the assembly root:
`<Assembly>.Web.Endpoints`, `<Assembly>.Web.AuthPolicies`, and
`<Assembly>.Web.AuthSchemes`. Keeping every registered declaration inside its
reserved namespace means a reviewer can enumerate the whole web surface from
the directory tree alone.",
        remediation: "Move the type into the reserved namespace for its kind.",
        examples: ExamplePair {
            before: "namespace Acme.Payments.Handlers;",
            after: "namespace Acme.Payments.Web.Endpoints.Example;",
        },
    }
}

fn explain_activity_required() -> Explanation {
    Explanation {
        title: "Activity metadata is mandatory",
        description: "\
Every endpoint must carry activity/audit metadata alongside its endpoint
annotation. Downstream observability (request archiving, monitoring,
importance-based retention) consumes this metadata unconditionally, so its
absence is an error rather than a warning.",
        remediation: "Attach the activity annotation with `importance` and `step`.",
        examples: ExamplePair {
            before: "\"annotation\": {\"endpoint\": {\"path\": \"GET /api/v1/example\", \"activity\": null}}",
            after: "\"annotation\": {\"endpoint\": {\"path\": \"GET /api/v1/example\", \"activity\": {\"importance\": \"high\", \"step\": \"finish\"}}}",
        },
    }
}

fn explain_route_shape() -> Explanation {
    Explanation {
        title: "Route string shape",
        description: "\
The route must be `<VERB> /path`: one verb token, one space, a path starting
with `/`. Supported verbs are GET, POST, PUT, PATCH, DELETE, and HEAD
(case-insensitive). Prefer GET for operations without a request body and POST
for operations with one; routing infrastructure supports only this small verb
set reliably.",
        remediation: "Use one of the supported verbs and a `/`-prefixed path.",
        examples: ExamplePair {
            before: "path = \"FETCH api/v1/example\"",
            after: "path = \"GET /api/v1/example\"",
        },
    }
}

fn explain_path_params() -> Explanation {
    Explanation {
        title: "Path parameters are discouraged",
        description: "\
Parameters embedded in the path are unnamed, which hurts maintainability and
auditability. Caches and proxies key on the full URI either way, so the query
string costs nothing. In place of `POST /myapp/mycollection/{collectionId}`
use `POST /myapp/mycollection?collectionId=...`.",
        remediation: "\
Move the parameter to the query string, or keep the path parameter and supply
`path_param_justification` explaining why it is needed.",
        examples: ExamplePair {
            before: "path = \"POST /api/v1/orders/{orderId}/cancel\"",
            after: "path = \"POST /api/v1/orders/cancel?orderId=...\"",
        },
    }
}

fn explain_base_prefix() -> Explanation {
    Explanation {
        title: "Routes live under the API base prefix",
        description: "\
All routes must start with the configured `api_base_path_prefix` so published
paths match the gateway prefix the service is deployed behind. The prefix is
set in `routeguard.toml`:

    [web]
    api_base_path_prefix = \"/api/v1\"
",
        remediation: "\
Move the route under the prefix, or supply `base_prefix_justification`
explaining why this route is published elsewhere.",
        examples: ExamplePair {
            before: "path = \"PUT /other/thing\"",
            after: "path = \"PUT /api/v1/other/thing\"",
        },
    }
}

fn explain_unused_justification() -> Explanation {
    Explanation {
        title: "Justification without a violation",
        description: "\
`base_prefix_justification` is only allowed when the route actually violates
the base-prefix rule. A justification on a conforming route is stale text that
would silently keep suppressing the rule if the route later moved.

Flagged for product-owner confirmation: this hygiene rule is preserved from the
original convention set and may be intentionally strict.",
        remediation: "Delete the unused justification field.",
        examples: ExamplePair {
            before: "path = \"GET /api/v1/x\", base_prefix_justification = \"legacy\"",
            after: "path = \"GET /api/v1/x\"",
        },
    }
}

fn explain_location() -> Explanation {
    Explanation {
        title: "Route-derived type location",
        description: "\
The declared route determines the single legal type for an endpoint: strip the
base prefix, turn `{param}` into `param-<name>`, PascalCase each dash-delimited
segment, join directory segments into a namespace suffix, and prefix the leaf
with `Endpoint`. `GET /api/v1/example/{id}/cancel` must therefore be
implemented by `<Assembly>.Web.Endpoints.Example.ParamId.EndpointCancel`.",
        remediation: "Rename/move the type to the derived location named in the diagnostic.",
        examples: ExamplePair {
            before: "Acme.Payments.Web.Endpoints.Misc.CancelHandler",
            after: "Acme.Payments.Web.Endpoints.Example.EndpointCancel",
        },
    }
}

fn explain_auth_policy_ref() -> Explanation {
    Explanation {
        title: "Endpoints reference an auth policy",
        description: "\
Every endpoint must name the authorization policy type that guards it, and the
referenced type name must start with `AuthPolicy`. The suffix becomes the
policy name wired into the generated `.RequireAuthorization(...)` call.",
        remediation: "Set `auth_policy_ref` to an `AuthPolicy*` type.",
        examples: ExamplePair {
            before: "auth_policy_ref = null",
            after: "auth_policy_ref = \"Acme.Payments.Web.AuthPolicies.AuthPolicyAdminOnly\"",
        },
    }
}

fn explain_naming_prefix() -> Explanation {
    Explanation {
        title: "Policy/scheme type-name prefix",
        description: "\
Auth policy types must be named `AuthPolicy<Name>` and auth scheme types
`AuthScheme<Name>`. The suffix after the prefix is the registered short name
and must itself be a valid identifier, because it is emitted as a string
constant and a registration key.",
        remediation: "Rename the type to carry the required prefix with an identifier suffix.",
        examples: ExamplePair {
            before: "PolicyAdminOnly",
            after: "AuthPolicyAdminOnly",
        },
    }
}

fn explain_method_name() -> Explanation {
    Explanation {
        title: "Fixed entry-point method names",
        description: "\
The generated registration code calls the annotated method by a fixed literal
name: `Execute` for endpoints, `Configure` for policies and schemes. A fixed
contract keeps the emitted units free of per-declaration configuration.",
        remediation: "Rename the annotated method to the contract name for its kind.",
        examples: ExamplePair {
            before: "public static void Handle(...)",
            after: "public static void Execute(...)",
        },
    }
}

fn explain_group_key() -> Explanation {
    Explanation {
        title: "Generation group names",
        description: "\
Entries aggregate into registration units keyed by group name. The default is
namespaced by kind and assembly (`MapEndpoints_<Assembly>`,
`MapAuthPolicies_<Assembly>`, `MapAuthSchemes_<Assembly>`); an explicit
`group_name` overrides it and must be a valid identifier since it becomes the
generated method name.",
        remediation: "Use a plain identifier for `group_name`, or omit it for the default.",
        examples: ExamplePair {
            before: "group_name = \"admin endpoints\"",
            after: "group_name = \"MapAdminEndpoints\"",
        },
    }
}

fn explain_config_settings() -> Explanation {
    Explanation {
        title: "Project settings",
        description: "\
`routeguard.toml` holds the pass-wide configuration. `api_base_path_prefix`
must not end with a slash; a malformed prefix aborts the pass before any
declaration is processed, because every endpoint's derived location would be
wrong.",
        remediation: "\
Set the prefix without a trailing slash:

    [web]
    api_base_path_prefix = \"/api/v1\"
",
        examples: ExamplePair {
            before: "api_base_path_prefix = \"/api/v1/\"",
            after: "api_base_path_prefix = \"/api/v1\"",
        },
    }
}
