//! Query and ingestion paths through the cluster.

use crate::icons::IconKind;
use crate::types::*;

const fn step_card(
    icon: IconKind,
    title: &'static str,
    description: &'static str,
    details: &'static [&'static str],
    tags: &'static [&'static str],
    delay_ms: u32,
) -> FlowStep {
    FlowStep::Card(
        ServiceRecord::new(icon, title, description)
            .details(details)
            .tags(tags)
            .size(CardSize::Small)
            .delay(delay_ms),
    )
}

const fn arrow(label: &'static str) -> FlowStep {
    FlowStep::Arrow(Arrow {
        label: Some(label),
        direction: ArrowDirection::Right,
    })
}

// ── Query Flow ────────────────────────────────────────────────────────────────

const QUERY_PATH: &[FlowStep] = &[
    FlowStep::Endpoint(Endpoint {
        kind: EndpointKind::Client,
        label: "Client",
        caption: "SQL Query",
        tone: Tone::Blue,
        delay_ms: 200,
    }),
    arrow("1. Request"),
    step_card(
        IconKind::Router,
        "Router",
        "API Gateway",
        &["Port 9088", "TLS termination", "Request routing"],
        &["gateway", "routing"],
        300,
    ),
    arrow("2. Route"),
    step_card(
        IconKind::Broker,
        "Broker",
        "Query coordinator",
        &["Query planning", "Scatter/gather", "Result merging"],
        &["query", "coordinator"],
        400,
    ),
    arrow("3. Scatter"),
    step_card(
        IconKind::Historical,
        "Historical",
        "Segment scan",
        &["Local cache", "Deep storage", "Parallel scan"],
        &["data", "scan"],
        500,
    ),
    arrow("4. Gather"),
    FlowStep::Endpoint(Endpoint {
        kind: EndpointKind::Results,
        label: "Results",
        caption: "JSON/CSV",
        tone: Tone::Green,
        delay_ms: 600,
    }),
];

const SEGMENT_FETCH: &[FlowStep] = &[
    step_card(
        IconKind::S3,
        "S3 Deep Storage",
        "Segment retrieval",
        &["Cache miss fallback", "druid/segments/", "Lazy loading"],
        &["storage", "s3"],
        800,
    ),
    FlowStep::Note {
        text: "↑ Fetch segments",
        hint: Some("On cache miss"),
    },
];

const QUERY_FLOW: Layer = Layer {
    title: "Query Flow",
    subtitle: "SQL query execution path",
    tone: Tone::Blue,
    delay_ms: 0,
    rows: &[
        Row::Flow { steps: QUERY_PATH },
        Row::Flow {
            steps: SEGMENT_FETCH,
        },
    ],
};

// ── Real-time Ingestion Flow ──────────────────────────────────────────────────

const STREAMING_PATH: &[FlowStep] = &[
    FlowStep::Endpoint(Endpoint {
        kind: EndpointKind::Source,
        label: "Data Source",
        caption: "Events",
        tone: Tone::Orange,
        delay_ms: 400,
    }),
    arrow("1. Produce"),
    step_card(
        IconKind::Msk,
        "MSK Kafka",
        "Message broker",
        &["Serverless", "IAM auth", "Topic partitions"],
        &["kafka", "streaming"],
        500,
    ),
    arrow("2. Consume"),
    step_card(
        IconKind::Overlord,
        "Overlord",
        "Supervisor control",
        &["Kafka supervisor", "Task assignment", "Offset tracking"],
        &["supervisor", "control"],
        600,
    ),
    arrow("3. Assign"),
    step_card(
        IconKind::MiddleManager,
        "K8s Tasks",
        "Ingestion workers",
        &["Real-time indexing", "Segment creation", "Handoff"],
        &["indexing", "tasks"],
        700,
    ),
    arrow("4. Publish"),
    step_card(
        IconKind::S3,
        "Deep Storage",
        "Segment persistence",
        &["S3 upload", "Metadata update", "Compaction ready"],
        &["storage", "persist"],
        800,
    ),
    arrow("5. Load"),
    step_card(
        IconKind::Historical,
        "Historical",
        "Segment serving",
        &["Segment load", "Cache population", "Query ready"],
        &["load", "serve"],
        900,
    ),
];

const SEGMENT_REGISTRY: &[FlowStep] = &[
    step_card(
        IconKind::Coordinator,
        "Coordinator",
        "Segment assignment",
        &["Load balancing", "Tier rules", "Replication"],
        &["coordination", "assignment"],
        1100,
    ),
    FlowStep::Link(Connection {
        direction: LineDirection::Horizontal,
        animated: true,
        label: Some("↔"),
    }),
    step_card(
        IconKind::PostgreSql,
        "Metadata Store",
        "Segment registry",
        &["Segment metadata", "Rules storage", "Config"],
        &["metadata", "postgresql"],
        1200,
    ),
];

const STREAMING_FLOW: Layer = Layer {
    title: "Real-time Ingestion Flow",
    subtitle: "Kafka streaming data pipeline",
    tone: Tone::Green,
    delay_ms: 300,
    rows: &[
        Row::Flow {
            steps: STREAMING_PATH,
        },
        Row::Flow {
            steps: SEGMENT_REGISTRY,
        },
    ],
};

// ── Batch Ingestion Flow ──────────────────────────────────────────────────────

const BATCH_PATH: &[FlowStep] = &[
    FlowStep::Endpoint(Endpoint {
        kind: EndpointKind::Files,
        label: "Source Files",
        caption: "S3/HDFS",
        tone: Tone::Purple,
        delay_ms: 600,
    }),
    arrow("1. Spec Submit"),
    step_card(
        IconKind::Overlord,
        "Overlord",
        "Job orchestration",
        &["Task creation", "Parallelism", "Progress tracking"],
        &["batch", "orchestration"],
        700,
    ),
    arrow("2. K8s Jobs"),
    step_card(
        IconKind::MiddleManager,
        "Index Tasks",
        "Parallel processing",
        &["MSQ engine", "Partition pruning", "Segment generation"],
        &["indexing", "msq"],
        800,
    ),
    arrow("3. Segments"),
    step_card(
        IconKind::S3,
        "MSQ Storage",
        "Intermediate results",
        &["Shuffle data", "Sort merge", "Final output"],
        &["msq", "intermediate"],
        900,
    ),
    arrow("4. Publish"),
    step_card(
        IconKind::S3,
        "Deep Storage",
        "Final segments",
        &["Segment upload", "Metadata commit", "Availability"],
        &["storage", "final"],
        1000,
    ),
];

const BATCH_FLOW: Layer = Layer {
    title: "Batch Ingestion Flow",
    subtitle: "S3/File-based data loading",
    tone: Tone::Purple,
    delay_ms: 500,
    rows: &[Row::Flow { steps: BATCH_PATH }],
};

pub static DIAGRAM: ViewDiagram = ViewDiagram {
    mode: ViewMode::DataFlow,
    sections: &[
        Section::Layer(QUERY_FLOW),
        Section::Layer(STREAMING_FLOW),
        Section::Layer(BATCH_FLOW),
    ],
};
