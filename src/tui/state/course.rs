// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Course outline data shown in the secondary pane

use serde::{Deserialize, Serialize};

/// One module of the course outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<String>,
}

impl OutlineItem {
    fn new(id: &str, title: &str, description: &str, duration: &str, week: u32, topics: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: Some(description.to_string()),
            duration: Some(duration.to_string()),
            week: Some(week),
            topics: topics.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// A course title plus its ordered outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseData {
    pub title: String,
    pub outline: Vec<OutlineItem>,
}

const COURSE_TITLE: &str = "AI-Powered Course Design with React & Next.js";

const KICKOFF_TOPICS: &[&str] = &[
    "Define target learner persona",
    "Capture scope with zod-powered schemas",
    "Map conversational UX flows",
];

const INTERFACE_TOPICS: &[&str] = &[
    "Design One Dark Pro inspired UI with Tailwind & shadcn primitives",
    "Structure chat and outline panes in Next.js App Router",
    "Instrument chat state management patterns",
];

impl CourseData {
    /// Outline the workspace opens with
    pub fn demo() -> Self {
        Self {
            title: COURSE_TITLE.to_string(),
            outline: vec![
                OutlineItem::new(
                    "1",
                    "Kickoff & Discovery",
                    "Set a clear product vision and gather course requirements.",
                    "Week 1",
                    1,
                    KICKOFF_TOPICS,
                ),
                OutlineItem::new(
                    "2",
                    "Interface Foundations",
                    "Craft responsive chat surfaces and outline panes.",
                    "Week 2",
                    2,
                    INTERFACE_TOPICS,
                ),
                OutlineItem::new(
                    "3",
                    "AI Orchestration",
                    "Integrate AI services that transform chat into structured outlines.",
                    "Week 3",
                    3,
                    &[
                        "Design system prompts for multi-turn conversation",
                        "Stream outline updates with server actions",
                        "Build refinement loops with evaluation hooks",
                    ],
                ),
            ],
        }
    }

    /// Outline posted by the assistant after the user asks about the course
    pub fn revised() -> Self {
        Self {
            title: COURSE_TITLE.to_string(),
            outline: vec![
                OutlineItem::new(
                    "1",
                    "Kickoff & Discovery",
                    "Overview of course planning fundamentals",
                    "2 hours",
                    1,
                    KICKOFF_TOPICS,
                ),
                OutlineItem::new(
                    "2",
                    "Interface Foundations",
                    "Deep dive into advanced concepts",
                    "3 hours",
                    2,
                    INTERFACE_TOPICS,
                ),
            ],
        }
    }

    pub fn topic_count(&self) -> usize {
        self.outline.iter().map(|item| item.topics.len()).sum()
    }
}
