//! Resolving a package dependency closure with a stateful visitor.
//!
//! Each package is expanded once even though several packages depend on it,
//! and a missing package aborts the walk with a descriptive error.

use std::collections::HashMap;

use anyhow::{anyhow, Context};
use frontier::{Enqueue, Visitor, Walker};

struct Resolver<'a> {
    registry: &'a HashMap<&'static str, Vec<&'static str>>,
    install_order: Vec<&'static str>,
}

impl Visitor<&'static str> for Resolver<'_> {
    type Error = anyhow::Error;

    fn visit(
        &mut self,
        package: &'static str,
        enqueue: &mut Enqueue<'_, &'static str>,
    ) -> anyhow::Result<()> {
        let deps = self
            .registry
            .get(package)
            .ok_or_else(|| anyhow!("package `{package}` is not in the registry"))?;
        self.install_order.push(package);
        enqueue.extend(deps.iter().copied());
        Ok(())
    }
}

fn resolve(
    registry: &HashMap<&'static str, Vec<&'static str>>,
    roots: &[&'static str],
) -> anyhow::Result<Vec<&'static str>> {
    let mut resolver = Resolver {
        registry,
        install_order: Vec::new(),
    };
    let mut walker = Walker::with_seeds(roots.iter().copied());
    walker
        .visit(&mut resolver)
        .map_err(|err| err.into_visitor_error().unwrap_or_else(|| anyhow!("frontier error")))
        .with_context(|| format!("resolving {roots:?}"))?;
    Ok(resolver.install_order)
}

fn main() -> anyhow::Result<()> {
    let mut registry = HashMap::from([
        ("app", vec!["http", "json", "log"]),
        ("http", vec!["io", "log", "tls"]),
        ("json", vec!["io"]),
        ("tls", vec!["io", "crypto"]),
        ("crypto", vec![]),
        ("io", vec![]),
        ("log", vec![]),
    ]);

    let order = resolve(&registry, &["app"])?;
    println!("breadth-first fetch order: {}", order.join(" -> "));

    registry.insert("log", vec!["clock"]);
    match resolve(&registry, &["app"]) {
        Ok(_) => println!("unexpectedly resolved"),
        Err(err) => println!("resolution failed: {err:#}"),
    }

    Ok(())
}
