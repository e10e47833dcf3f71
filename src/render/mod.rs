pub mod errors;

use crate::assets::TEMPLATES_MOUNT;
use crate::records::FlagTypeRecord;
use clap::ValueEnum;
use errors::RenderError;
use serde::Serialize;
use std::fmt;
use std::io::Write;

/// Target Go packages, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Package {
    Cli,
    Altsrc,
}

impl Package {
    pub const ALL: [Package; 2] = [Package::Cli, Package::Altsrc];

    pub fn name(self) -> &'static str {
        match self {
            Package::Cli => "cli",
            Package::Altsrc => "altsrc",
        }
    }

    pub fn template_path(self) -> String {
        format!("{}/{}_flags_generated.gotpl", TEMPLATES_MOUNT, self.name())
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Data a package template is rendered against.
#[derive(Debug, Serialize)]
pub struct GenerationRequest<'a> {
    pub package_name: &'static str,
    pub flag_types: &'a [FlagTypeRecord],
}

impl<'a> GenerationRequest<'a> {
    pub fn new(package: Package, flag_types: &'a [FlagTypeRecord]) -> Self {
        Self {
            package_name: package.name(),
            flag_types,
        }
    }
}

pub struct TemplateEngine {
    parser: liquid::Parser,
}

impl TemplateEngine {
    pub fn new() -> Result<Self, RenderError> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| RenderError::EngineSetup(e.to_string()))?;
        Ok(Self { parser })
    }

    pub fn parse(&self, name: &str, source: &[u8]) -> Result<FlagTemplate, RenderError> {
        let text = std::str::from_utf8(source).map_err(|e| RenderError::InvalidUtf8 {
            template: name.to_string(),
            message: e.to_string(),
        })?;

        let inner = self
            .parser
            .parse(text)
            .map_err(|e| RenderError::ParseFailed {
                template: name.to_string(),
                message: e.to_string(),
            })?;

        Ok(FlagTemplate {
            name: name.to_string(),
            inner,
        })
    }
}

pub struct FlagTemplate {
    name: String,
    inner: liquid::Template,
}

impl FlagTemplate {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render_to(
        &self,
        request: &GenerationRequest<'_>,
        writer: &mut dyn Write,
    ) -> Result<(), RenderError> {
        let globals = liquid::to_object(request).map_err(|e| self.render_failed(e))?;
        self.inner
            .render_to(writer, &globals)
            .map_err(|e| self.render_failed(e))
    }

    pub fn render(&self, request: &GenerationRequest<'_>) -> Result<String, RenderError> {
        let mut buf = Vec::new();
        self.render_to(request, &mut buf)?;
        String::from_utf8(buf).map_err(|e| RenderError::InvalidUtf8 {
            template: self.name.clone(),
            message: e.to_string(),
        })
    }

    fn render_failed(&self, e: liquid::Error) -> RenderError {
        RenderError::RenderFailed {
            template: self.name.clone(),
            message: e.to_string(),
        }
    }
}
