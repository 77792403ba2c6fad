//! Baseline rows written by the bootstrapper into empty tables.

use serde_json::{json, Value};
use time::{Duration, OffsetDateTime};

use crate::core::time::format_offset;

pub(crate) struct SeedTask {
    pub(crate) id: &'static str,
    pub(crate) title: &'static str,
    pub(crate) course: &'static str,
    pub(crate) priority: &'static str,
    pub(crate) description: &'static str,
}

pub(crate) struct SeedCourse {
    pub(crate) id: &'static str,
    pub(crate) code: &'static str,
    pub(crate) name: &'static str,
    pub(crate) category: &'static str,
    pub(crate) credit_hours: i32,
    pub(crate) description: &'static str,
    pub(crate) professors: Value,
    pub(crate) schedule: Value,
    pub(crate) content: Value,
    pub(crate) assignments: Value,
    pub(crate) exams: Value,
}

pub(crate) fn tasks() -> [SeedTask; 4] {
    [
        SeedTask {
            id: "1",
            title: "Complete Data Structures Assignment",
            course: "Computer Science",
            priority: "high",
            description: "Implement binary search tree",
        },
        SeedTask {
            id: "2",
            title: "Read Chapter 5 - Algorithms",
            course: "Computer Science",
            priority: "medium",
            description: "Study sorting algorithms",
        },
        SeedTask {
            id: "3",
            title: "Math Problem Set 7",
            course: "Mathematics",
            priority: "low",
            description: "Linear algebra exercises",
        },
        SeedTask {
            id: "4",
            title: "Physics Lab Report",
            course: "Physics",
            priority: "high",
            description: "Write lab report",
        },
    ]
}

/// Assignment due dates and exam dates are placed a fixed number of days after `now`.
pub(crate) fn courses(now: OffsetDateTime) -> [SeedCourse; 4] {
    let in_days = |days: i64| format_offset(now + Duration::days(days));

    [
        SeedCourse {
            id: "1",
            code: "COMP101",
            name: "Introduction to Computer Science",
            category: "comp",
            credit_hours: 4,
            description: "An introductory course to computer science concepts including \
                          programming fundamentals, data structures, and algorithms.",
            professors: json!(["Dr. Smith"]),
            schedule: json!([
                { "day": "Monday", "time": "10:00 AM - 11:30 AM", "location": "Room 204" },
                { "day": "Wednesday", "time": "10:00 AM - 11:30 AM", "location": "Room 204" },
                { "day": "Friday", "time": "10:00 AM - 11:30 AM", "location": "Lab 101" }
            ]),
            content: json!([
                {
                    "week": 1,
                    "topic": "Introduction to Programming",
                    "description": "Basic concepts of programming and problem-solving"
                },
                {
                    "week": 2,
                    "topic": "Variables and Data Types",
                    "description": "Understanding variables, data types, and memory management"
                }
            ]),
            assignments: json!([{
                "id": "1",
                "title": "Hello World Program",
                "dueDate": in_days(7),
                "maxScore": 100,
                "description": "Write a simple program that displays \"Hello, World!\""
            }]),
            exams: json!([{
                "id": "1",
                "title": "Midterm Exam",
                "date": in_days(30),
                "format": "Written and Practical",
                "gradingBreakdown": "Theory: 60%, Practical: 40%"
            }]),
        },
        SeedCourse {
            id: "2",
            code: "MATH101",
            name: "Calculus I",
            category: "math",
            credit_hours: 4,
            description: "An introductory course to calculus covering limits, derivatives, \
                          and integrals.",
            professors: json!(["Dr. Brown"]),
            schedule: json!([
                { "day": "Tuesday", "time": "2:00 PM - 3:30 PM", "location": "Room 305" },
                { "day": "Thursday", "time": "2:00 PM - 3:30 PM", "location": "Room 305" }
            ]),
            content: json!([
                {
                    "week": 1,
                    "topic": "Limits and Continuity",
                    "description": "Understanding limits and continuity of functions"
                },
                {
                    "week": 2,
                    "topic": "Derivatives",
                    "description": "Introduction to derivatives and differentiation rules"
                }
            ]),
            assignments: json!([{
                "id": "2",
                "title": "Derivative Problems Set",
                "dueDate": in_days(5),
                "maxScore": 50,
                "description": "Solve problems on differentiation"
            }]),
            exams: json!([{
                "id": "2",
                "title": "Calculus Midterm",
                "date": in_days(28),
                "format": "Written Exam",
                "gradingBreakdown": "Problem Solving: 70%, Theory: 30%"
            }]),
        },
        SeedCourse {
            id: "3",
            code: "PHYS101",
            name: "Physics I",
            category: "phys",
            credit_hours: 4,
            description: "Mechanics and Thermodynamics covering motion, forces, energy, and heat.",
            professors: json!(["Prof. Johnson"]),
            schedule: json!([
                { "day": "Monday", "time": "2:00 PM - 3:30 PM", "location": "Room 201" },
                { "day": "Wednesday", "time": "2:00 PM - 3:30 PM", "location": "Room 201" },
                { "day": "Friday", "time": "2:00 PM - 4:00 PM", "location": "Lab 102" }
            ]),
            content: json!([
                {
                    "week": 1,
                    "topic": "Kinematics",
                    "description": "Study of motion without considering forces"
                },
                {
                    "week": 2,
                    "topic": "Newton's Laws",
                    "description": "Forces and their effects on motion"
                }
            ]),
            assignments: json!([{
                "id": "3",
                "title": "Force Analysis Problems",
                "dueDate": in_days(6),
                "maxScore": 75,
                "description": "Analyze forces in various scenarios"
            }]),
            exams: json!([{
                "id": "3",
                "title": "Physics Midterm",
                "date": in_days(32),
                "format": "Written + Lab Practical",
                "gradingBreakdown": "Theory: 50%, Practical: 50%"
            }]),
        },
        SeedCourse {
            id: "4",
            code: "COMP201",
            name: "Data Structures",
            category: "comp",
            credit_hours: 4,
            description: "Advanced data structures including trees, graphs, and hash tables.",
            professors: json!(["Dr. Smith"]),
            schedule: json!([
                { "day": "Tuesday", "time": "10:00 AM - 11:30 AM", "location": "Room 203" },
                { "day": "Thursday", "time": "10:00 AM - 11:30 AM", "location": "Room 203" }
            ]),
            content: json!([
                {
                    "week": 1,
                    "topic": "Arrays and Linked Lists",
                    "description": "Linear data structures"
                },
                {
                    "week": 2,
                    "topic": "Stacks and Queues",
                    "description": "LIFO and FIFO data structures"
                }
            ]),
            assignments: json!([{
                "id": "4",
                "title": "Binary Tree Implementation",
                "dueDate": in_days(8),
                "maxScore": 100,
                "description": "Implement binary search tree with insert, delete, and search \
                                operations"
            }]),
            exams: json!([{
                "id": "4",
                "title": "Data Structures Exam",
                "date": in_days(35),
                "format": "Written + Coding",
                "gradingBreakdown": "Theory: 40%, Coding: 60%"
            }]),
        },
    ]
}
