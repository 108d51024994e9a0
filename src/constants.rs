pub const CREATE_REACT_APP: &str = "create-react-app";
pub const CREATE_SNOWPACK_APP: &str = "create-snowpack-app";
pub const SNOWPACK_REACT_TEMPLATE: &str = "@snowpack/app-template-react";
pub const SNOWPACK_REACT_TS_TEMPLATE: &str = "@snowpack/app-template-react-typescript";

pub const REACT_ROUTER: &str = "react-router-dom";
pub const REACT_ROUTER_TYPES: &str = "@types/react-router-dom";

pub const PRETTIER_PACKAGES: [&str; 3] = [
    "prettier",
    "eslint-config-prettier",
    "eslint-plugin-prettier",
];
/// Entry appended to `eslintConfig.extends`
pub const PRETTIER_ESLINT_EXTENDS: &str = "prettier";
pub const LINT_SCRIPT: &str = "eslint '*/**/*.{js,ts,tsx}' --quiet --fix";

/// Directories created under `src/` for the recommended project structure
pub const RECOMMENDED_DIRS: [&str; 6] = [
    "components",
    "pages",
    "hooks",
    "services",
    "utils",
    "assets",
];

pub fn prettier_rules() -> serde_json::Value {
    serde_json::json!({
        "bracketSpacing": true,
        "semi": false,
        "trailingComma": "all",
        "singleQuote": true,
        "jsxSingleQuote": true,
        "printWidth": 100,
        "tabWidth": 2
    })
}
