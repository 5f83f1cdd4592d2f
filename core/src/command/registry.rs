use std::collections::HashMap;

use crate::errors::GearError;

use super::naming::method_name;

/// Handler signature every command shares.
pub type CommandFn<A> = fn(&mut A) -> anyhow::Result<()>;

pub struct CommandSpec<A> {
    pub token: String,
    pub method: String,
    pub about: Option<String>,
    pub handler: CommandFn<A>,
}

impl<A> Clone for CommandSpec<A> {
    fn clone(&self) -> Self {
        Self {
            token: self.token.clone(),
            method: self.method.clone(),
            about: self.about.clone(),
            handler: self.handler,
        }
    }
}

impl<A> std::fmt::Debug for CommandSpec<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSpec")
            .field("token", &self.token)
            .field("method", &self.method)
            .field("about", &self.about)
            .finish_non_exhaustive()
    }
}

/// Registration table from method name (`BuildCmd`) to handler.
///
/// Defects found while registering are kept and reported by [`validate`]
/// rather than panicking, so a bad table shows up as a programmer error at
/// dispatch time.
///
/// [`validate`]: CommandSet::validate
pub struct CommandSet<A> {
    specs: Vec<CommandSpec<A>>,
    by_method: HashMap<String, usize>,
    defects: Vec<(String, String)>,
}

impl<A> Default for CommandSet<A> {
    fn default() -> Self {
        Self {
            specs: Vec::new(),
            by_method: HashMap::new(),
            defects: Vec::new(),
        }
    }
}

impl<A> CommandSet<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(self, token: &str, handler: CommandFn<A>) -> Self {
        self.insert(token, None, handler)
    }

    pub fn add_with_about(self, token: &str, about: &str, handler: CommandFn<A>) -> Self {
        self.insert(token, Some(about.to_string()), handler)
    }

    fn insert(mut self, token: &str, about: Option<String>, handler: CommandFn<A>) -> Self {
        let method = method_name(token);

        if method == super::naming::METHOD_SUFFIX {
            self.defects.push((
                method,
                format!("command token {token:?} does not produce a method name"),
            ));
            return self;
        }

        if let Some(&idx) = self.by_method.get(&method) {
            let existing = &self.specs[idx].token;
            self.defects.push((
                method,
                format!("commands {existing:?} and {token:?} resolve to the same method"),
            ));
            return self;
        }

        tracing::trace!(target: "gear.dispatch", token, method = %method, "command registered");
        self.by_method.insert(method.clone(), self.specs.len());
        self.specs.push(CommandSpec {
            token: token.to_string(),
            method,
            about,
            handler,
        });
        self
    }

    pub fn get(&self, method: &str) -> Option<&CommandSpec<A>> {
        self.by_method.get(method).map(|&idx| &self.specs[idx])
    }

    pub fn contains(&self, method: &str) -> bool {
        self.by_method.contains_key(method)
    }

    /// Commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec<A>> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn validate(&self) -> Result<(), GearError> {
        match self.defects.first() {
            Some((name, detail)) => Err(GearError::Programmer {
                name: name.clone(),
                detail: detail.clone(),
            }),
            None => Ok(()),
        }
    }
}
