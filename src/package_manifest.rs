use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// A generated project's `package.json`, key order preserved
#[derive(Debug, Clone, PartialEq)]
pub struct PackageManifest {
    root: Map<String, Value>,
}

impl TryFrom<&str> for PackageManifest {
    type Error = anyhow::Error;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        match serde_json::from_str(contents)? {
            Value::Object(root) => Ok(Self { root }),
            _ => bail!("package manifest is not a JSON object"),
        }
    }
}

impl PackageManifest {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("cannot read package manifest {}", path.display()))?;
        Self::try_from(contents.as_str())
            .with_context(|| format!("invalid package manifest {}", path.display()))
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_pretty_string()?)
            .with_context(|| format!("cannot write package manifest {}", path.display()))
    }

    /// Two-space indented JSON with a trailing newline
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut text = serde_json::to_string_pretty(&self.root)?;
        text.push('\n');
        Ok(text)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Append `entry` to `eslintConfig.extends` unless it is already listed
    pub fn add_eslint_extends(&mut self, entry: &str) -> Result<()> {
        let eslint = object_entry(&mut self.root, "eslintConfig")?;
        let extends = eslint
            .entry("extends")
            .or_insert_with(|| Value::Array(Vec::new()));
        // eslint accepts a single string as well
        if extends.is_string() {
            let single = extends.take();
            *extends = Value::Array(vec![single]);
        }
        let Value::Array(list) = extends else {
            bail!("`eslintConfig.extends` must be a string or a list");
        };
        if !list.iter().any(|item| item.as_str() == Some(entry)) {
            list.push(Value::String(entry.to_string()));
        }
        Ok(())
    }

    pub fn set_prettier_rules(&mut self, rules: Value) {
        self.root.insert("prettier".into(), rules);
    }

    /// Add or overwrite `scripts.<name>`
    pub fn set_script(&mut self, name: &str, command: &str) -> Result<()> {
        let scripts = object_entry(&mut self.root, "scripts")?;
        scripts.insert(name.into(), Value::String(command.into()));
        Ok(())
    }
}

fn object_entry<'a>(
    map: &'a mut Map<String, Value>,
    key: &str,
) -> Result<&'a mut Map<String, Value>> {
    match map.entry(key).or_insert_with(|| Value::Object(Map::new())) {
        Value::Object(object) => Ok(object),
        _ => bail!("`{key}` must be an object"),
    }
}
