//! The client script: wire a director to each builder, run the recipes,
//! and print what comes out.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::builder::{BuildSteps, Builder};
use crate::director::Director;
use crate::parts::PartsListBuilder;
use crate::user::UserBuilder;

pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let mut director = Director::new();

    let builder = Rc::new(RefCell::new(PartsListBuilder::new()));
    director.set_builder(&builder);

    writeln!(out, "{}", "Standard basic product:".bold())?;
    director
        .build_minimal_viable_product()
        .context("building the basic product")?;
    writeln!(out, "{}", builder.borrow_mut().retrieve_product())?;
    writeln!(out)?;

    writeln!(out, "{}", "Standard full featured product:".bold())?;
    director
        .build_full_featured_product()
        .context("building the full featured product")?;
    writeln!(out, "{}", builder.borrow_mut().retrieve_product())?;
    writeln!(out)?;

    // The builder also works without a director.
    writeln!(out, "{}", "Custom product:".bold())?;
    {
        let mut custom = builder.borrow_mut();
        custom.produce_part_a();
        custom.produce_part_b();
        writeln!(out, "{}", custom.retrieve_product())?;
    }

    writeln!(out, "\n{}", "XXXXXXXXXXXXXXXXXXXXXXXXX".dimmed())?;
    writeln!(out, "\n{}", "Criacao de Usuarios".bold())?;

    let builder = Rc::new(RefCell::new(UserBuilder::new()));
    director.set_builder(&builder);

    writeln!(out, "{}", "Usuario Visitante:".bold())?;
    director
        .build_visitor_user()
        .context("building the visitor user")?;
    writeln!(out, "{}", builder.borrow_mut().retrieve_product())?;

    writeln!(out, "{}", "Usuario Registrado:".bold())?;
    director
        .build_registered_user()
        .context("building the registered user")?;
    writeln!(out, "{}", builder.borrow_mut().retrieve_product())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render() -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_demo_prints_parts_lists() {
        let output = render();
        let lines: Vec<&str> = output.lines().collect();

        let after = |heading: &str| {
            let idx = lines.iter().position(|l| *l == heading).unwrap();
            lines[idx + 1]
        };
        assert_eq!(after("Standard basic product:"), "Product parts: PartA1");
        assert_eq!(
            after("Standard full featured product:"),
            "Product parts: PartA1, PartB1, PartC1"
        );
        assert_eq!(after("Custom product:"), "Product parts: PartA1, PartB1");
    }

    #[test]
    fn test_demo_prints_visitor_then_registered_user() {
        let output = render();
        let (_, users) = output.split_once("Usuario Visitante:\n").unwrap();
        let (visitor, registered) = users.split_once("Usuario Registrado:\n").unwrap();

        assert!(visitor.starts_with(" Ip: "));
        assert!(visitor.contains("\n Data-Hora: "));
        assert!(!visitor.contains("Nome"));

        assert!(registered.starts_with(" Ip: "));
        assert!(registered.trim_end().ends_with(";\n Nome: Andre"));
    }
}
