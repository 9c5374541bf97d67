//! CDK stacks, the Helm chart, loaded extensions and the custom image.

use crate::icons::IconKind;
use crate::types::*;

// ── CDK Stack Architecture ────────────────────────────────────────────────────

const fn nested_stack(
    icon: IconKind,
    name: &'static str,
    description: &'static str,
    lines: &'static [TileLine],
    delay_ms: u32,
) -> Tile {
    Tile {
        icon: Some(icon),
        name,
        description,
        badge: None,
        lines,
        delay_ms,
    }
}

const fn depends(on: &'static str) -> TileLine {
    TileLine {
        dot: None,
        label: Some("Depends:"),
        text: on,
        accent: Some(Tone::Teal),
        hint: None,
    }
}

const NESTED_STACKS: TileGrid = TileGrid {
    title: "DruidStack",
    subtitle: Some("Main CDK Stack - Orchestrates all nested stacks"),
    icon: Some(IconKind::Cdk),
    columns: 3,
    tiles: &[
        nested_stack(
            IconKind::Vpc,
            "NetworkNestedStack",
            "VPC, Subnets, NAT",
            &[depends("None")],
            300,
        ),
        nested_stack(
            IconKind::Eks,
            "EksNestedStack",
            "EKS Cluster",
            &[depends("Network")],
            350,
        ),
        nested_stack(
            IconKind::Helm,
            "AddonsNestedStack",
            "Core K8s Addons",
            &[depends("EKS")],
            400,
        ),
        nested_stack(
            IconKind::Grafana,
            "ObservabilityAddonsStack",
            "Grafana Alloy",
            &[depends("EKS")],
            450,
        ),
        nested_stack(
            IconKind::PostgreSql,
            "DruidSetupNestedStack",
            "RDS, S3, MSK, IAM",
            &[depends("EKS + Addons")],
            500,
        ),
        nested_stack(
            IconKind::Druid,
            "DruidNestedStack",
            "Helm Chart Deploy",
            &[depends("Setup")],
            550,
        ),
    ],
};

const CDK_STACKS: Layer = Layer {
    title: "CDK Stack Architecture",
    subtitle: "Infrastructure as Code - Java CDK",
    tone: Tone::Yellow,
    delay_ms: 0,
    rows: &[
        Row::Tiles(NESTED_STACKS),
        Row::Steps {
            title: "Deployment Order",
            steps: &[
                "Network",
                "EKS",
                "Addons",
                "Observability",
                "Druid Setup",
                "Druid",
            ],
            delay_ms: 800,
        },
    ],
};

// ── Helm Chart Deployment ─────────────────────────────────────────────────────

const fn arrow(label: &'static str) -> FlowStep {
    FlowStep::Arrow(Arrow {
        label: Some(label),
        direction: ArrowDirection::Right,
    })
}

const CDK_VALUES: ServiceRecord =
    ServiceRecord::new(IconKind::Cdk, "CDK Values", "Mustache templating")
        .details(&[
            "Dynamic configuration",
            "Context injection",
            "Environment-specific",
        ])
        .delay(400)
        .metrics(&[
            Metric {
                label: "Templates",
                value: "15+",
            },
            Metric {
                label: "Lines",
                value: "733",
            },
        ])
        .tags(&["cdk", "mustache", "config"]);

const HELM_VALUES: ServiceRecord = ServiceRecord::new(IconKind::Helm, "Helm Values", "values.yaml")
    .details(&["Component configs", "Resource limits", "Node selectors"])
    .delay(500)
    .tags(&["helm", "values", "yaml"]);

const K8S_RESOURCES: ServiceRecord =
    ServiceRecord::new(IconKind::Kubernetes, "K8s Resources", "Manifests")
        .details(&["StatefulSets", "Deployments", "ConfigMaps", "Services"])
        .delay(600)
        .metrics(&[
            Metric {
                label: "Resources",
                value: "20+",
            },
            Metric {
                label: "Components",
                value: "6",
            },
        ])
        .tags(&["kubernetes", "manifests"]);

const EKS_CLUSTER: ServiceRecord = ServiceRecord::new(IconKind::Eks, "EKS Cluster", "Running pods")
    .details(&["Rolling updates", "Health checks", "Auto-scaling"])
    .delay(700)
    .metrics(&[
        Metric {
            label: "Pods",
            value: "6+",
        },
        Metric {
            label: "Services",
            value: "6",
        },
    ])
    .tags(&["eks", "deployment", "running"]);

const fn chart_component(
    name: &'static str,
    kind: &'static str,
    replicas: &'static [TileLine],
    delay_ms: u32,
) -> Tile {
    Tile {
        icon: None,
        name,
        description: kind,
        badge: None,
        lines: replicas,
        delay_ms,
    }
}

const fn replicas(text: &'static str) -> TileLine {
    TileLine {
        dot: None,
        label: None,
        text,
        accent: Some(Tone::Teal),
        hint: None,
    }
}

const CHART_COMPONENTS: TileGrid = TileGrid {
    title: "Chart Components",
    subtitle: None,
    icon: None,
    columns: 6,
    tiles: &[
        chart_component("Coordinator", "StatefulSet", &[replicas("Replicas: 1")], 800),
        chart_component("Broker", "Deployment", &[replicas("Replicas: 1")], 850),
        chart_component("Historical", "StatefulSet", &[replicas("Replicas: 1")], 900),
        chart_component("Overlord", "StatefulSet", &[replicas("Replicas: 1")], 950),
        chart_component("Router", "Deployment", &[replicas("Replicas: 1")], 1000),
        chart_component("Task", "PodTemplate", &[replicas("Replicas: N/A")], 1050),
    ],
};

const HELM_CHART: Layer = Layer {
    title: "Helm Chart Deployment",
    subtitle: "Druid Helm Chart v35.0.0",
    tone: Tone::Blue,
    delay_ms: 300,
    rows: &[
        Row::Flow {
            steps: &[
                FlowStep::Card(CDK_VALUES),
                arrow("Generate"),
                FlowStep::Card(HELM_VALUES),
                arrow("Template"),
                FlowStep::Card(K8S_RESOURCES),
                arrow("Apply"),
                FlowStep::Card(EKS_CLUSTER),
            ],
        },
        Row::Tiles(CHART_COMPONENTS),
    ],
};

// ── Druid Extensions ──────────────────────────────────────────────────────────

const fn extension(
    name: &'static str,
    description: &'static str,
    category: &'static str,
    delay_ms: u32,
) -> Tile {
    Tile {
        icon: None,
        name,
        description,
        badge: Some(Badge {
            label: category,
            tone: Tone::Teal,
        }),
        lines: &[],
        delay_ms,
    }
}

const EXTENSIONS: TileGrid = TileGrid {
    title: "Extensions",
    subtitle: None,
    icon: None,
    columns: 4,
    tiles: &[
        extension("druid-s3-extensions", "S3 deep storage support", "Storage", 600),
        extension(
            "druid-kafka-indexing-service",
            "Kafka streaming ingestion",
            "Ingestion",
            650,
        ),
        extension(
            "druid-kubernetes-extensions",
            "K8s service discovery",
            "Discovery",
            700,
        ),
        extension(
            "druid-kubernetes-overlord-extensions",
            "K8s task runner",
            "Tasks",
            750,
        ),
        extension(
            "postgresql-metadata-storage",
            "PostgreSQL metadata",
            "Metadata",
            800,
        ),
        extension("druid-aws-rds-extensions", "RDS IAM auth", "AWS", 850),
        extension("druid-basic-security", "Basic auth & authz", "Security", 900),
        extension("prometheus-emitter", "Prometheus metrics", "Monitoring", 950),
    ],
};

const DRUID_EXTENSIONS: Layer = Layer {
    title: "Druid Extensions",
    subtitle: "Loaded extensions and capabilities",
    tone: Tone::Teal,
    delay_ms: 500,
    rows: &[Row::Tiles(EXTENSIONS)],
};

// ── Custom Docker Image ───────────────────────────────────────────────────────

const BASE_IMAGE: ServiceRecord =
    ServiceRecord::new(IconKind::Druid, "Base Image", "apache/druid:35.0.0")
        .details(&[
            "Official Apache image",
            "Java 21 runtime",
            "All core extensions",
        ])
        .delay(800)
        .tags(&["base", "apache", "druid"]);

const MSK_IAM_AUTH: ServiceRecord =
    ServiceRecord::new(IconKind::Msk, "MSK IAM Auth", "aws-msk-iam-auth-2.3.2")
        .details(&[
            "IAM authentication",
            "Kafka extensions",
            "Security integration",
        ])
        .delay(900)
        .tags(&["msk", "iam", "kafka"]);

const ECR_REPOSITORY: ServiceRecord =
    ServiceRecord::new(IconKind::Eks, "ECR Repository", "CDK DockerImageAsset")
        .details(&[
            "Auto push to ECR",
            "Asset hash versioning",
            "Region deployment",
        ])
        .delay(1000)
        .metrics(&[
            Metric {
                label: "Registry",
                value: "ECR",
            },
            Metric {
                label: "Auto-push",
                value: "Yes",
            },
        ])
        .tags(&["ecr", "docker", "cdk"]);

const DOCKER_IMAGE: Layer = Layer {
    title: "Custom Docker Image",
    subtitle: "Apache Druid 35.0.0 with AWS extensions",
    tone: Tone::Cyan,
    delay_ms: 700,
    rows: &[Row::Flow {
        steps: &[
            FlowStep::Card(BASE_IMAGE),
            arrow("+ AWS"),
            FlowStep::Card(MSK_IAM_AUTH),
            arrow("Build"),
            FlowStep::Card(ECR_REPOSITORY),
        ],
    }],
};

pub static DIAGRAM: ViewDiagram = ViewDiagram {
    mode: ViewMode::Deployment,
    sections: &[
        Section::Layer(CDK_STACKS),
        Section::Layer(HELM_CHART),
        Section::Layer(DRUID_EXTENSIONS),
        Section::Layer(DOCKER_IMAGE),
    ],
};
