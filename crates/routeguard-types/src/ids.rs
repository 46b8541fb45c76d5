//! Stable identifiers for rules and diagnostic codes.
//!
//! `rule_id` is a dotted namespace. `code` is a short snake_case discriminator.
//! Both are part of the tool's contract: hosts key suppressions and tooling on
//! them, so renaming one is a breaking change.

// Rules: endpoints
pub const RULE_ENDPOINT_STRUCTURAL: &str = "endpoint.structural";
pub const RULE_ENDPOINT_PLACEMENT: &str = "endpoint.placement";
pub const RULE_ENDPOINT_ACTIVITY: &str = "endpoint.activity_required";
pub const RULE_ENDPOINT_ROUTE_SHAPE: &str = "endpoint.route_shape";
pub const RULE_ENDPOINT_PATH_PARAMS: &str = "endpoint.path_params";
pub const RULE_ENDPOINT_BASE_PREFIX: &str = "endpoint.base_prefix";
pub const RULE_ENDPOINT_LOCATION: &str = "endpoint.location";
pub const RULE_ENDPOINT_AUTH_POLICY: &str = "endpoint.auth_policy";
pub const RULE_ENDPOINT_METHOD_NAME: &str = "endpoint.method_name";
pub const RULE_ENDPOINT_GROUP_KEY: &str = "endpoint.group_key";

// Rules: auth policies
pub const RULE_POLICY_STRUCTURAL: &str = "policy.structural";
pub const RULE_POLICY_PLACEMENT: &str = "policy.placement";
pub const RULE_POLICY_NAMING: &str = "policy.naming";
pub const RULE_POLICY_METHOD_NAME: &str = "policy.method_name";
pub const RULE_POLICY_GROUP_KEY: &str = "policy.group_key";

// Rules: auth schemes
pub const RULE_SCHEME_STRUCTURAL: &str = "scheme.structural";
pub const RULE_SCHEME_PLACEMENT: &str = "scheme.placement";
pub const RULE_SCHEME_NAMING: &str = "scheme.naming";
pub const RULE_SCHEME_METHOD_NAME: &str = "scheme.method_name";
pub const RULE_SCHEME_GROUP_KEY: &str = "scheme.group_key";

// Rules: registration trace (Info on success)
pub const RULE_REGISTRATION: &str = "registration.fragment";

// Codes: structural (shared by all three kinds)
pub const CODE_TYPE_NOT_PARTIAL: &str = "type_not_partial";
pub const CODE_TYPE_NOT_PUBLIC: &str = "type_not_public";
pub const CODE_METHOD_NOT_PUBLIC: &str = "method_not_public";
pub const CODE_METHOD_NOT_STATIC: &str = "method_not_static";

// Codes: placement
pub const CODE_OUTSIDE_RESERVED_NAMESPACE: &str = "outside_reserved_namespace";

// Codes: naming (policies/schemes)
pub const CODE_MISSING_NAME_PREFIX: &str = "missing_name_prefix";
pub const CODE_INVALID_SHORT_NAME: &str = "invalid_short_name";

// Codes: endpoint.activity_required
pub const CODE_MISSING_ACTIVITY: &str = "missing_activity_annotation";

// Codes: endpoint.route_shape
pub const CODE_MALFORMED_ROUTE: &str = "malformed_route";
pub const CODE_UNSUPPORTED_METHOD: &str = "unsupported_method";

// Codes: endpoint.path_params (Warning)
pub const CODE_PARAMETER_IN_PATH: &str = "parameter_in_path";

// Codes: endpoint.base_prefix
pub const CODE_PREFIX_MISSING_CONFIG: &str = "missing_config";
pub const CODE_OUTSIDE_PREFIX: &str = "outside_prefix";
pub const CODE_UNUSED_JUSTIFICATION: &str = "unused_justification";

// Codes: endpoint.location
pub const CODE_WRONG_TYPE_FOR_PATH: &str = "wrong_type_for_path";

// Codes: endpoint.auth_policy
pub const CODE_MISSING_POLICY_REF: &str = "missing_policy_ref";
pub const CODE_POLICY_REF_PREFIX: &str = "policy_ref_prefix";

// Codes: method name contract
pub const CODE_WRONG_METHOD_NAME: &str = "wrong_method_name";

// Codes: group keys
pub const CODE_INVALID_GROUP_KEY: &str = "invalid_group_key";

// Codes: registration trace
pub const CODE_FRAGMENT_INCLUDED: &str = "fragment_included";

// Configuration-level
pub const RULE_CONFIG_SETTINGS: &str = "config.settings";
pub const CODE_CONFIG_PARSE: &str = "parse_error";
pub const CODE_PREFIX_TRAILING_SLASH: &str = "prefix_trailing_slash";
pub const CODE_INVALID_ASSEMBLY: &str = "invalid_assembly";

// Tool-level
pub const RULE_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
