/// `src/Routes.(tsx|js)`, valid as both TypeScript and JavaScript
pub const REACT_ROUTER_TEMPLATE: &str = r#"import React from 'react'
import { BrowserRouter as Router, Route, Switch } from 'react-router-dom'

import App from './App'

const Routes = () => (
  <Router>
    <Switch>
      <Route exact path="/" component={App} />
    </Switch>
  </Router>
)

export default Routes
"#;

pub fn routes_file_name(typescript: bool) -> &'static str {
    if typescript {
        "Routes.tsx"
    } else {
        "Routes.js"
    }
}
