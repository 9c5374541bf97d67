//! Icon library: every symbol the diagram can draw.
//!
//! Icons are pure data. The renderer decides the glyph; this module only
//! fixes the name, a short abbreviation for narrow layouts, and the brand
//! color of the symbol.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IconKind {
    // Druid processes
    Druid,
    Coordinator,
    Broker,
    Historical,
    Overlord,
    Router,
    MiddleManager,
    // AWS
    Vpc,
    Eks,
    S3,
    Rds,
    Msk,
    Iam,
    SecretsManager,
    Alb,
    CloudWatch,
    // Tooling and Kubernetes ecosystem
    Helm,
    Cdk,
    Kubernetes,
    Karpenter,
    Grafana,
    CertManager,
    Zookeeper,
    Docker,
    PostgreSql,
    ExternalSecrets,
    Tls,
    MetricsServer,
    ExternalDns,
    Reloader,
    Goldilocks,
    Velero,
    Kyverno,
    NodeTerminationHandler,
}

impl IconKind {
    pub const ALL: [IconKind; 34] = [
        IconKind::Druid,
        IconKind::Coordinator,
        IconKind::Broker,
        IconKind::Historical,
        IconKind::Overlord,
        IconKind::Router,
        IconKind::MiddleManager,
        IconKind::Vpc,
        IconKind::Eks,
        IconKind::S3,
        IconKind::Rds,
        IconKind::Msk,
        IconKind::Iam,
        IconKind::SecretsManager,
        IconKind::Alb,
        IconKind::CloudWatch,
        IconKind::Helm,
        IconKind::Cdk,
        IconKind::Kubernetes,
        IconKind::Karpenter,
        IconKind::Grafana,
        IconKind::CertManager,
        IconKind::Zookeeper,
        IconKind::Docker,
        IconKind::PostgreSql,
        IconKind::ExternalSecrets,
        IconKind::Tls,
        IconKind::MetricsServer,
        IconKind::ExternalDns,
        IconKind::Reloader,
        IconKind::Goldilocks,
        IconKind::Velero,
        IconKind::Kyverno,
        IconKind::NodeTerminationHandler,
    ];

    /// Symbolic name of the icon.
    pub fn name(self) -> &'static str {
        match self {
            IconKind::Druid => "Druid",
            IconKind::Coordinator => "Coordinator",
            IconKind::Broker => "Broker",
            IconKind::Historical => "Historical",
            IconKind::Overlord => "Overlord",
            IconKind::Router => "Router",
            IconKind::MiddleManager => "MiddleManager",
            IconKind::Vpc => "VPC",
            IconKind::Eks => "EKS",
            IconKind::S3 => "S3",
            IconKind::Rds => "RDS",
            IconKind::Msk => "MSK",
            IconKind::Iam => "IAM",
            IconKind::SecretsManager => "SecretsManager",
            IconKind::Alb => "ALB",
            IconKind::CloudWatch => "CloudWatch",
            IconKind::Helm => "Helm",
            IconKind::Cdk => "CDK",
            IconKind::Kubernetes => "Kubernetes",
            IconKind::Karpenter => "Karpenter",
            IconKind::Grafana => "Grafana",
            IconKind::CertManager => "CertManager",
            IconKind::Zookeeper => "Zookeeper",
            IconKind::Docker => "Docker",
            IconKind::PostgreSql => "PostgreSQL",
            IconKind::ExternalSecrets => "ExternalSecrets",
            IconKind::Tls => "TLS",
            IconKind::MetricsServer => "MetricsServer",
            IconKind::ExternalDns => "ExternalDNS",
            IconKind::Reloader => "Reloader",
            IconKind::Goldilocks => "Goldilocks",
            IconKind::Velero => "Velero",
            IconKind::Kyverno => "Kyverno",
            IconKind::NodeTerminationHandler => "NodeTerminationHandler",
        }
    }

    /// At most four characters, used when no glyph fits.
    pub fn abbreviation(self) -> &'static str {
        match self {
            IconKind::Druid => "DRD",
            IconKind::Coordinator => "CRD",
            IconKind::Broker => "BRK",
            IconKind::Historical => "HST",
            IconKind::Overlord => "OVL",
            IconKind::Router => "RTR",
            IconKind::MiddleManager => "MM",
            IconKind::Vpc => "VPC",
            IconKind::Eks => "EKS",
            IconKind::S3 => "S3",
            IconKind::Rds => "RDS",
            IconKind::Msk => "MSK",
            IconKind::Iam => "IAM",
            IconKind::SecretsManager => "SM",
            IconKind::Alb => "ALB",
            IconKind::CloudWatch => "CW",
            IconKind::Helm => "HELM",
            IconKind::Cdk => "CDK",
            IconKind::Kubernetes => "K8S",
            IconKind::Karpenter => "KRP",
            IconKind::Grafana => "GRF",
            IconKind::CertManager => "CM",
            IconKind::Zookeeper => "ZK",
            IconKind::Docker => "DKR",
            IconKind::PostgreSql => "PG",
            IconKind::ExternalSecrets => "ES",
            IconKind::Tls => "TLS",
            IconKind::MetricsServer => "MS",
            IconKind::ExternalDns => "DNS",
            IconKind::Reloader => "RLD",
            IconKind::Goldilocks => "GLD",
            IconKind::Velero => "VLR",
            IconKind::Kyverno => "KYV",
            IconKind::NodeTerminationHandler => "NTH",
        }
    }

    /// Brand fill color as `(r, g, b)`.
    pub fn brand_color(self) -> (u8, u8, u8) {
        let hex: u32 = match self {
            IconKind::Druid => 0x14B8A6,
            IconKind::Coordinator => 0x0D9488,
            IconKind::Broker => 0x0F766E,
            IconKind::Historical => 0x115E59,
            IconKind::Overlord => 0x134E4A,
            IconKind::Router => 0x0D9488,
            IconKind::MiddleManager => 0x14B8A6,
            IconKind::Vpc => 0x8C4FFF,
            IconKind::Eks => 0xFF9900,
            IconKind::S3 => 0x569A31,
            IconKind::Rds => 0x3B48CC,
            IconKind::Msk => 0xFF9900,
            IconKind::Iam => 0xDD344C,
            IconKind::SecretsManager => 0xDD344C,
            IconKind::Alb => 0x8C4FFF,
            IconKind::CloudWatch => 0xFF4F8B,
            IconKind::Helm => 0x0F1689,
            IconKind::Cdk => 0x232F3E,
            IconKind::Kubernetes => 0x326CE5,
            IconKind::Karpenter => 0x0D47A1,
            IconKind::Grafana => 0xF46800,
            IconKind::CertManager => 0x326CE5,
            IconKind::Zookeeper => 0x6E4C13,
            IconKind::Docker => 0x2496ED,
            IconKind::PostgreSql => 0x336791,
            IconKind::ExternalSecrets => 0x7C3AED,
            IconKind::Tls => 0x16A34A,
            IconKind::MetricsServer => 0x326CE5,
            IconKind::ExternalDns => 0xFF9900,
            IconKind::Reloader => 0x14B8A6,
            IconKind::Goldilocks => 0xFFB800,
            IconKind::Velero => 0x1A73E8,
            IconKind::Kyverno => 0xEF6C00,
            IconKind::NodeTerminationHandler => 0xD32F2F,
        };
        ((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = IconKind::ALL.iter().map(|i| i.name()).collect();
        assert_eq!(names.len(), IconKind::ALL.len());
    }

    #[test]
    fn test_abbreviations_fit_four_cells() {
        for icon in IconKind::ALL {
            let abbr = icon.abbreviation();
            assert!(!abbr.is_empty() && abbr.len() <= 4, "{}", icon.name());
        }
    }

    #[test]
    fn test_brand_color_unpacks_hex() {
        assert_eq!(IconKind::Eks.brand_color(), (0xFF, 0x99, 0x00));
        assert_eq!(IconKind::Druid.brand_color(), (0x14, 0xB8, 0xA6));
        assert_eq!(IconKind::Vpc.brand_color(), (0x8C, 0x4F, 0xFF));
    }
}
