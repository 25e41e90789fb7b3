/// Type prefixes of resources managed through HashiCorp's own providers.
pub const HASHICORP_PREFIXES: &[&str] = &["tfe_", "vault_"];

pub fn is_hashicorp_type(resource_type: &str) -> bool {
    HASHICORP_PREFIXES
        .iter()
        .any(|prefix| resource_type.starts_with(prefix))
}

/// Which resource types take part in a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResourceScope {
    #[default]
    All,
    ExcludeHashicorp,
    OnlyHashicorp,
}

impl ResourceScope {
    pub fn admits(self, resource_type: &str) -> bool {
        match self {
            Self::All => true,
            Self::ExcludeHashicorp => !is_hashicorp_type(resource_type),
            Self::OnlyHashicorp => is_hashicorp_type(resource_type),
        }
    }
}
