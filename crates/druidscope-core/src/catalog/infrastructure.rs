//! AWS Cloud resources: VPC, EKS, data services and observability.

use crate::icons::IconKind;
use crate::types::*;

// ── VPC Network ───────────────────────────────────────────────────────────────

const NAT_GATEWAY: ServiceRecord =
    ServiceRecord::new(IconKind::Vpc, "NAT Gateway", "Egress for private subnets")
        .details(&[
            "High availability",
            "Auto-scaling bandwidth",
            "2 NAT Gateways",
        ])
        .size(CardSize::Small)
        .delay(400)
        .metrics(&[
            Metric {
                label: "Gateways",
                value: "2",
            },
            Metric {
                label: "Elastic IPs",
                value: "2",
            },
        ])
        .tags(&["networking", "egress", "ha"])
        .docs("https://docs.aws.amazon.com/vpc/latest/userguide/vpc-nat-gateway.html");

const INTERNET_GATEWAY: ServiceRecord =
    ServiceRecord::new(IconKind::Alb, "Internet Gateway", "Public internet access")
        .details(&["Ingress routing", "Redundant by default"])
        .size(CardSize::Small)
        .delay(500)
        .tags(&["networking", "ingress"])
        .docs("https://docs.aws.amazon.com/vpc/latest/userguide/VPC_Internet_Gateway.html");

const fn availability_zone(name: &'static str, lines: &'static [TileLine], delay_ms: u32) -> Tile {
    Tile {
        icon: None,
        name,
        description: "",
        badge: None,
        lines,
        delay_ms,
    }
}

const ZONES: TileGrid = TileGrid {
    title: "Availability Zones",
    subtitle: None,
    icon: None,
    columns: 3,
    tiles: &[
        availability_zone(
            "Availability Zone: us-west-2a",
            &[
                TileLine {
                    dot: Some(Tone::Green),
                    label: None,
                    text: "Public Subnet (10.0.0.0/24)",
                    accent: None,
                    hint: Some("NAT Gateway attached"),
                },
                TileLine {
                    dot: Some(Tone::Teal),
                    label: None,
                    text: "Private Subnet (10.0.10.0/24)",
                    accent: None,
                    hint: Some("Private workloads"),
                },
            ],
            200,
        ),
        availability_zone(
            "Availability Zone: us-west-2b",
            &[
                TileLine {
                    dot: Some(Tone::Green),
                    label: None,
                    text: "Public Subnet (10.0.1.0/24)",
                    accent: None,
                    hint: Some("NAT Gateway attached"),
                },
                TileLine {
                    dot: Some(Tone::Teal),
                    label: None,
                    text: "Private Subnet (10.0.11.0/24)",
                    accent: None,
                    hint: Some("Private workloads"),
                },
            ],
            300,
        ),
        availability_zone(
            "Availability Zone: us-west-2c",
            &[
                TileLine {
                    dot: Some(Tone::Green),
                    label: None,
                    text: "Public Subnet (10.0.2.0/24)",
                    accent: None,
                    hint: Some("NAT Gateway attached"),
                },
                TileLine {
                    dot: Some(Tone::Teal),
                    label: None,
                    text: "Private Subnet (10.0.12.0/24)",
                    accent: None,
                    hint: Some("Private workloads"),
                },
            ],
            400,
        ),
    ],
};

const VPC_NETWORK: Layer = Layer {
    title: "VPC Network",
    subtitle: "10.0.0.0/16 - Multi-AZ - Private & Public Subnets",
    tone: Tone::Purple,
    delay_ms: 100,
    rows: &[
        Row::Tiles(ZONES),
        Row::Cards {
            columns: 2,
            cards: &[NAT_GATEWAY, INTERNET_GATEWAY],
        },
    ],
};

// ── Amazon EKS Cluster ────────────────────────────────────────────────────────

const CONTROL_PLANE: ServiceRecord =
    ServiceRecord::new(IconKind::Eks, "Control Plane", "Managed Kubernetes API")
        .details(&[
            "Multi-AZ deployment",
            "OIDC provider",
            "Encrypted etcd",
            "Pod Identity",
        ])
        .delay(400)
        .metrics(&[
            Metric {
                label: "Version",
                value: "1.28+",
            },
            Metric {
                label: "Uptime",
                value: "99.95%",
            },
        ])
        .tags(&["kubernetes", "managed", "control-plane"])
        .docs("https://docs.aws.amazon.com/eks/latest/userguide/clusters.html");

const KARPENTER: ServiceRecord =
    ServiceRecord::new(IconKind::Karpenter, "Karpenter", "Node auto-provisioning")
        .details(&[
            "Spot instance support",
            "Right-sizing",
            "Multi-instance types",
            "Bottlerocket AMI",
        ])
        .delay(500)
        .metrics(&[
            Metric {
                label: "Node Pools",
                value: "6",
            },
            Metric {
                label: "Spot Enabled",
                value: "Yes",
            },
        ])
        .tags(&["autoscaling", "spot", "cost-optimization"])
        .docs("https://karpenter.sh/docs/");

const LB_CONTROLLER: ServiceRecord =
    ServiceRecord::new(IconKind::Alb, "AWS LB Controller", "Ingress management")
        .details(&[
            "ALB/NLB support",
            "TLS termination",
            "Target group binding",
        ])
        .delay(600)
        .metrics(&[
            Metric {
                label: "Ingresses",
                value: "1",
            },
            Metric {
                label: "Services",
                value: "6",
            },
        ])
        .tags(&["ingress", "load-balancer", "tls"])
        .docs("https://kubernetes-sigs.github.io/aws-load-balancer-controller/");

const EXTERNAL_SECRETS: ServiceRecord = ServiceRecord::new(
    IconKind::ExternalSecrets,
    "External Secrets",
    "Secret synchronization",
)
.details(&[
    "AWS Secrets Manager",
    "Auto-refresh (1h)",
    "TLS certs sync",
])
.delay(700)
.metrics(&[
    Metric {
        label: "Secrets Synced",
        value: "4",
    },
    Metric {
        label: "Refresh",
        value: "1h",
    },
])
.tags(&["security", "secrets", "sync"])
.docs("https://external-secrets.io/latest/");

const fn addon(icon: IconKind, name: &'static str, description: &'static str, delay_ms: u32) -> Tile {
    Tile {
        icon: Some(icon),
        name,
        description,
        badge: None,
        lines: &[],
        delay_ms,
    }
}

const EKS_ADDONS: TileGrid = TileGrid {
    title: "EKS Addons",
    subtitle: None,
    icon: None,
    columns: 4,
    tiles: &[
        addon(IconKind::CertManager, "cert-manager", "TLS certificate management", 800),
        addon(IconKind::MetricsServer, "Metrics Server", "Resource metrics API", 900),
        addon(IconKind::ExternalDns, "External DNS", "Route53 automation", 1000),
        addon(IconKind::Reloader, "Reloader", "ConfigMap/Secret reload", 1100),
        addon(IconKind::Goldilocks, "Goldilocks", "Resource recommendations", 1200),
        addon(IconKind::Kyverno, "Kyverno", "Policy enforcement", 1300),
        addon(
            IconKind::NodeTerminationHandler,
            "Node Termination",
            "Graceful node shutdown",
            1400,
        ),
        addon(IconKind::Velero, "Velero", "Backup & disaster recovery", 1500),
    ],
};

const EKS_CLUSTER: Layer = Layer {
    title: "Amazon EKS Cluster",
    subtitle: "Kubernetes 1.28+ - ZooKeeper-less Druid",
    tone: Tone::Orange,
    delay_ms: 300,
    rows: &[
        Row::Cards {
            columns: 4,
            cards: &[CONTROL_PLANE, KARPENTER, LB_CONTROLLER, EXTERNAL_SECRETS],
        },
        Row::Tiles(EKS_ADDONS),
    ],
};

// ── Data Services ─────────────────────────────────────────────────────────────

const S3_DEEP_STORAGE: ServiceRecord =
    ServiceRecord::new(IconKind::S3, "S3 Deep Storage", "Druid segments storage")
        .details(&[
            "druid/segments/",
            "Lifecycle: 1 day TTL",
            "KMS encryption",
            "Versioning enabled",
        ])
        .size(CardSize::Large)
        .delay(600)
        .metrics(&[
            Metric {
                label: "Bucket",
                value: "deepstorage",
            },
            Metric {
                label: "Storage Class",
                value: "Standard",
            },
        ])
        .tags(&["storage", "segments", "encrypted"])
        .docs("https://druid.apache.org/docs/latest/dependencies/deep-storage/");

const S3_INDEX_LOGS: ServiceRecord =
    ServiceRecord::new(IconKind::S3, "S3 Index Logs", "Task indexing logs")
        .details(&[
            "druid/indexing-logs/",
            "1-day auto-cleanup",
            "Task execution history",
        ])
        .size(CardSize::Large)
        .delay(700)
        .metrics(&[
            Metric {
                label: "Bucket",
                value: "indexlogs",
            },
            Metric {
                label: "TTL",
                value: "1 day",
            },
        ])
        .tags(&["logs", "indexing", "cleanup"]);

const AURORA_POSTGRESQL: ServiceRecord =
    ServiceRecord::new(IconKind::PostgreSql, "Aurora PostgreSQL", "Druid metadata store")
        .details(&[
            "Aurora PostgreSQL 17.6",
            "Performance Insights",
            "Multi-AZ deployment",
            "Encrypted storage",
        ])
        .size(CardSize::Large)
        .delay(800)
        .metrics(&[
            Metric {
                label: "Engine",
                value: "Aurora",
            },
            Metric {
                label: "Version",
                value: "17.6",
            },
        ])
        .tags(&["database", "metadata", "aurora"])
        .docs("https://druid.apache.org/docs/latest/dependencies/metadata-storage/");

const MSK_SERVERLESS: ServiceRecord =
    ServiceRecord::new(IconKind::Msk, "MSK Serverless", "Kafka streaming ingestion")
        .details(&[
            "Serverless cluster",
            "IAM authentication",
            "Real-time data ingestion",
            "Supervisor integration",
        ])
        .size(CardSize::Large)
        .delay(900)
        .metrics(&[
            Metric {
                label: "Type",
                value: "Serverless",
            },
            Metric {
                label: "Auth",
                value: "IAM",
            },
        ])
        .tags(&["streaming", "kafka", "ingestion"])
        .docs("https://druid.apache.org/docs/latest/ingestion/kafka-ingestion/");

const DATA_SERVICES: Layer = Layer {
    title: "Data Services",
    subtitle: "Storage - Metadata - Streaming",
    tone: Tone::Teal,
    delay_ms: 500,
    rows: &[Row::Cards {
        columns: 4,
        cards: &[
            S3_DEEP_STORAGE,
            S3_INDEX_LOGS,
            AURORA_POSTGRESQL,
            MSK_SERVERLESS,
        ],
    }],
};

// ── Observability ─────────────────────────────────────────────────────────────

const GRAFANA_ALLOY: ServiceRecord =
    ServiceRecord::new(IconKind::Grafana, "Grafana Alloy", "Telemetry collector")
        .details(&["OTLP ingestion", "Prometheus scraping", "Log forwarding"])
        .delay(800)
        .metrics(&[
            Metric {
                label: "Samples/sec",
                value: "5K+",
            },
            Metric {
                label: "Targets",
                value: "12",
            },
        ])
        .tags(&["otel", "prometheus", "collector"])
        .docs("https://grafana.com/docs/alloy/latest/");

const CLOUDWATCH: ServiceRecord =
    ServiceRecord::new(IconKind::CloudWatch, "CloudWatch", "AWS native monitoring")
        .details(&["Container Insights", "Log Groups", "Custom metrics"])
        .delay(900)
        .metrics(&[
            Metric {
                label: "Dashboards",
                value: "2",
            },
            Metric {
                label: "Alarms",
                value: "8",
            },
        ])
        .tags(&["monitoring", "aws", "logs"])
        .docs("https://docs.aws.amazon.com/cloudwatch/");

const PROMETHEUS_EMITTER: ServiceRecord =
    ServiceRecord::new(IconKind::Druid, "Prometheus Emitter", "Druid metrics export")
        .details(&[
            "JVM metrics",
            "Query metrics",
            "Ingestion stats",
            "Port 9000",
        ])
        .delay(1000)
        .metrics(&[
            Metric {
                label: "Port",
                value: "9000",
            },
            Metric {
                label: "Interval",
                value: "1m",
            },
        ])
        .tags(&["prometheus", "metrics", "druid"]);

const OBSERVABILITY: Layer = Layer {
    title: "Observability",
    subtitle: "Monitoring - Logging - Metrics",
    tone: Tone::Pink,
    delay_ms: 700,
    rows: &[Row::Cards {
        columns: 3,
        cards: &[GRAFANA_ALLOY, CLOUDWATCH, PROMETHEUS_EMITTER],
    }],
};

pub static DIAGRAM: ViewDiagram = ViewDiagram {
    mode: ViewMode::Infrastructure,
    sections: &[Section::Group(Group {
        label: "AWS Cloud",
        badge: None,
        tone: Tone::Orange,
        sections: &[
            Section::Layer(VPC_NETWORK),
            Section::Layer(EKS_CLUSTER),
            Section::Layer(DATA_SERVICES),
            Section::Layer(OBSERVABILITY),
        ],
    })],
};
