//! Apache Druid components, node pools and the security configuration.

use crate::icons::IconKind;
use crate::types::*;

// ── Master Nodes ──────────────────────────────────────────────────────────────

const COORDINATOR: ServiceRecord =
    ServiceRecord::new(IconKind::Coordinator, "Coordinator", "Segment management")
        .details(&[
            "Segment availability",
            "Load balancing (cost)",
            "Tier management",
            "Compaction scheduling",
        ])
        .size(CardSize::Large)
        .delay(200)
        .metrics(&[
            Metric {
                label: "Replicas",
                value: "1",
            },
            Metric {
                label: "Heap",
                value: "6-12GB",
            },
            Metric {
                label: "Instance",
                value: "m6i/m5",
            },
        ])
        .tags(&["master", "coordinator", "statefulset"])
        .docs("https://druid.apache.org/docs/latest/design/coordinator/");

const OVERLORD: ServiceRecord =
    ServiceRecord::new(IconKind::Overlord, "Overlord", "Task orchestration")
        .details(&[
            "K8s task runner",
            "Ingestion management",
            "Supervisor control",
            "10 concurrent tasks",
        ])
        .size(CardSize::Large)
        .delay(300)
        .metrics(&[
            Metric {
                label: "Replicas",
                value: "1",
            },
            Metric {
                label: "Heap",
                value: "9GB",
            },
            Metric {
                label: "Capacity",
                value: "10 tasks",
            },
        ])
        .tags(&["master", "overlord", "tasks"])
        .docs("https://druid.apache.org/docs/latest/design/overlord/");

const MASTER_NODES: Layer = Layer {
    title: "Master Nodes",
    subtitle: "Cluster coordination and task management",
    tone: Tone::Purple,
    delay_ms: 100,
    rows: &[Row::Cards {
        columns: 2,
        cards: &[COORDINATOR, OVERLORD],
    }],
};

// ── Query Nodes ───────────────────────────────────────────────────────────────

const BROKER: ServiceRecord = ServiceRecord::new(IconKind::Broker, "Broker", "Query coordinator")
    .details(&[
        "SQL/Avatica support",
        "38 query threads",
        "500MB process buffers",
        "Result caching",
    ])
    .size(CardSize::Large)
    .delay(400)
    .metrics(&[
        Metric {
            label: "Replicas",
            value: "1",
        },
        Metric {
            label: "Heap",
            value: "8GB",
        },
        Metric {
            label: "Direct Memory",
            value: "8GB",
        },
    ])
    .tags(&["query", "broker", "deployment"])
    .docs("https://druid.apache.org/docs/latest/design/broker/");

const ROUTER: ServiceRecord = ServiceRecord::new(IconKind::Router, "Router", "API gateway")
    .details(&[
        "Request routing",
        "Port 9088 (external)",
        "Management proxy",
        "Web console access",
    ])
    .size(CardSize::Large)
    .delay(500)
    .metrics(&[
        Metric {
            label: "Replicas",
            value: "1",
        },
        Metric {
            label: "Heap",
            value: "512MB",
        },
        Metric {
            label: "Port",
            value: "9088",
        },
    ])
    .tags(&["query", "router", "gateway"])
    .docs("https://druid.apache.org/docs/latest/design/router/");

const QUERY_NODES: Layer = Layer {
    title: "Query Nodes",
    subtitle: "Query routing and execution",
    tone: Tone::Blue,
    delay_ms: 300,
    rows: &[Row::Cards {
        columns: 2,
        cards: &[BROKER, ROUTER],
    }],
};

// ── Data Nodes ────────────────────────────────────────────────────────────────

const HISTORICAL: ServiceRecord =
    ServiceRecord::new(IconKind::Historical, "Historical", "Segment storage & queries")
        .details(&[
            "120GB segment cache",
            "12 processing threads",
            "Memory-mapped segments",
            "Tiered storage support",
        ])
        .size(CardSize::Large)
        .delay(600)
        .metrics(&[
            Metric {
                label: "Replicas",
                value: "1",
            },
            Metric {
                label: "Heap",
                value: "8GB",
            },
            Metric {
                label: "Direct Memory",
                value: "40GB",
            },
            Metric {
                label: "Cache",
                value: "120GB",
            },
        ])
        .tags(&["data", "historical", "statefulset"])
        .docs("https://druid.apache.org/docs/latest/design/historical/");

const MIDDLE_MANAGER_TASKS: ServiceRecord = ServiceRecord::new(
    IconKind::MiddleManager,
    "MiddleManager Tasks",
    "K8s job execution",
)
.details(&[
    "Kubernetes task runner",
    "48GB heap per task",
    "Dynamic pod creation",
    "Task templates",
])
.size(CardSize::Large)
.delay(700)
.metrics(&[
    Metric {
        label: "Type",
        value: "K8s Jobs",
    },
    Metric {
        label: "Heap",
        value: "48GB",
    },
    Metric {
        label: "Direct Memory",
        value: "8GB",
    },
])
.tags(&["data", "tasks", "kubernetes"])
.docs("https://druid.apache.org/docs/latest/design/indexer/");

const DATA_NODES: Layer = Layer {
    title: "Data Nodes",
    subtitle: "Data storage and processing",
    tone: Tone::Green,
    delay_ms: 500,
    rows: &[Row::Cards {
        columns: 2,
        cards: &[HISTORICAL, MIDDLE_MANAGER_TASKS],
    }],
};

// ── Karpenter Node Pools ──────────────────────────────────────────────────────

const SPOT: Badge = Badge {
    label: "Spot",
    tone: Tone::Green,
};

const ON_DEMAND: Badge = Badge {
    label: "On-Demand",
    tone: Tone::Blue,
};

const AMD64: &[TileLine] = &[TileLine {
    dot: None,
    label: None,
    text: "amd64",
    accent: Some(Tone::Slate),
    hint: None,
}];

const fn node_pool(name: &'static str, types: &'static str, badge: Badge, delay_ms: u32) -> Tile {
    Tile {
        icon: None,
        name,
        description: types,
        badge: Some(badge),
        lines: AMD64,
        delay_ms,
    }
}

const NODE_POOLS: TileGrid = TileGrid {
    title: "Karpenter Node Pools",
    subtitle: None,
    icon: None,
    columns: 5,
    tiles: &[
        node_pool("Coordinator", "m6i, m5, m5a", SPOT, 800),
        node_pool("Broker", "m6i, m5, m5n, c6i", SPOT, 900),
        node_pool("Router", "t3a, t3, m5", SPOT, 1000),
        node_pool("Historical", "i4i, i3, r6i, r5", ON_DEMAND, 1100),
        node_pool("Tasks", "i4i, i3, c6i, c5, m6i", SPOT, 1200),
    ],
};

// ── Security Configuration ────────────────────────────────────────────────────

const MTLS: ServiceRecord = ServiceRecord::new(IconKind::Tls, "mTLS Enabled", "Inter-component encryption")
    .details(&[
        "PKCS12 keystores",
        "Auto cert rotation",
        "Port 8281-8290",
        "cert-manager issued",
    ])
    .delay(800)
    .metrics(&[
        Metric {
            label: "Protocol",
            value: "TLS 1.3",
        },
        Metric {
            label: "Refresh",
            value: "180s",
        },
    ])
    .tags(&["security", "tls", "encryption"]);

const BASIC_AUTH: ServiceRecord = ServiceRecord::new(IconKind::Iam, "Basic Auth", "User authentication")
    .details(&[
        "Admin user",
        "druid_system user",
        "Secrets Manager creds",
        "Authenticator chain",
    ])
    .delay(900)
    .metrics(&[
        Metric {
            label: "Users",
            value: "2",
        },
        Metric {
            label: "Escalator",
            value: "Enabled",
        },
    ])
    .tags(&["auth", "basic", "users"]);

const SECRETS_MANAGER: ServiceRecord =
    ServiceRecord::new(IconKind::SecretsManager, "Secrets Manager", "Credential storage")
        .details(&[
            "Admin credentials",
            "System credentials",
            "RDS credentials",
            "TLS certificates",
        ])
        .delay(1000)
        .metrics(&[
            Metric {
                label: "Secrets",
                value: "4",
            },
            Metric {
                label: "Rotation",
                value: "Manual",
            },
        ])
        .tags(&["secrets", "aws", "credentials"]);

const POD_IDENTITY: ServiceRecord = ServiceRecord::new(IconKind::Iam, "Pod Identity", "IRSA configuration")
    .details(&[
        "S3 bucket access",
        "MSK cluster access",
        "Secrets Manager",
        "Fine-grained IAM",
    ])
    .delay(1100)
    .metrics(&[
        Metric {
            label: "Policies",
            value: "3",
        },
        Metric {
            label: "Type",
            value: "IRSA",
        },
    ])
    .tags(&["iam", "irsa", "pod-identity"]);

const SECURITY: Layer = Layer {
    title: "Security Configuration",
    subtitle: "TLS - Authentication - Authorization",
    tone: Tone::Red,
    delay_ms: 700,
    rows: &[Row::Cards {
        columns: 4,
        cards: &[MTLS, BASIC_AUTH, SECRETS_MANAGER, POD_IDENTITY],
    }],
};

pub static DIAGRAM: ViewDiagram = ViewDiagram {
    mode: ViewMode::DruidCluster,
    sections: &[
        Section::Group(Group {
            label: "Apache Druid Cluster (v35.0.0)",
            badge: Some("ZooKeeper-less (K8s Discovery)"),
            tone: Tone::Teal,
            sections: &[
                Section::Layer(MASTER_NODES),
                Section::Layer(QUERY_NODES),
                Section::Layer(DATA_NODES),
                Section::Tiles(NODE_POOLS),
            ],
        }),
        Section::Layer(SECURITY),
    ],
};
