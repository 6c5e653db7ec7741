#[cfg(test)]
pub mod fixtures {
    use crate::database::{Config, CsvTableSource, MemoryTableSource};

    pub const STUDENT: &str = "\
id,name,age
1,John,30
2,Jane,25
3,Bob,22
4,Alice,24
";

    pub const ENROLLMENT: &str = "\
student_id,course
1,Mathematics
1,Physics
2,Chemistry
3,Mathematics
5,Biology
";

    pub fn school() -> MemoryTableSource {
        let csv = CsvTableSource::new(Config::new());
        let source = MemoryTableSource::new();
        source.insert("student", csv.parse("student", STUDENT.as_bytes()).unwrap());
        source.insert("enrollment", csv.parse("enrollment", ENROLLMENT.as_bytes()).unwrap());
        source
    }

    pub fn two_students() -> MemoryTableSource {
        let csv = CsvTableSource::new(Config::new());
        let rows = csv.parse("student", b"id,name\n1,Bob\n2,Ann\n").unwrap();
        MemoryTableSource::new().with_table("student", rows)
    }
}

#[cfg(test)]
mod end_to_end {
    use serde_json::json;

    use super::fixtures::{school, two_students};
    use crate::{
        database::{Config, CsvTableSource},
        executor::{execute_query, EngineError, QueryEngine},
    };

    #[tokio::test]
    async fn order_by_name() {
        let engine = QueryEngine::new(two_students());
        let rows = engine.execute_json("SELECT name FROM student ORDER BY name ASC").await.unwrap();
        assert_eq!(rows, json!([{ "name": "Ann" }, { "name": "Bob" }]));
    }

    #[tokio::test]
    async fn count_star() {
        let engine = QueryEngine::new(two_students());
        let rows = engine.execute_json("SELECT COUNT(*) FROM student").await.unwrap();
        assert_eq!(rows, json!([{ "COUNT(*)": 2 }]));
    }

    #[tokio::test]
    async fn where_with_and() {
        let rows = execute_query("SELECT id, name FROM student WHERE age > 22 AND name != 'John'", &school())
            .await
            .unwrap();
        let rows: Vec<_> = rows.into_iter().map(|r| r.into_value()).collect();
        assert_eq!(rows, vec![json!({ "id": "2", "name": "Jane" }), json!({ "id": "4", "name": "Alice" })]);
    }

    #[tokio::test]
    async fn quoted_number_compares_numerically() {
        let engine = QueryEngine::new(school());
        let rows = engine.execute_json("SELECT name FROM student WHERE age >= '25'").await.unwrap();
        assert_eq!(rows, json!([{ "name": "John" }, { "name": "Jane" }]));
    }

    #[tokio::test]
    async fn inner_join() {
        let engine = QueryEngine::new(school());
        let rows = engine
            .execute_json("SELECT student.name, enrollment.course FROM student INNER JOIN enrollment ON student.id = enrollment.student_id")
            .await
            .unwrap();

        assert_eq!(rows, json!([
            { "student.name": "John", "enrollment.course": "Mathematics" },
            { "student.name": "John", "enrollment.course": "Physics" },
            { "student.name": "Jane", "enrollment.course": "Chemistry" },
            { "student.name": "Bob",  "enrollment.course": "Mathematics" }
        ]));
    }

    #[tokio::test]
    async fn left_join_null_extends_unmatched_students() {
        let engine = QueryEngine::new(school());
        let rows = engine
            .execute_json("SELECT student.name, enrollment.course FROM student LEFT JOIN enrollment ON student.id = enrollment.student_id")
            .await
            .unwrap();

        let rows = rows.as_array().unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4], json!({ "student.name": "Alice", "enrollment.course": null }));
    }

    #[tokio::test]
    async fn right_join_keeps_every_enrollment() {
        let engine = QueryEngine::new(school());
        let rows = engine
            .execute_json("SELECT student.name, enrollment.course FROM student RIGHT JOIN enrollment ON student.id = enrollment.student_id")
            .await
            .unwrap();

        let rows = rows.as_array().unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[3], json!({ "student.name": "Bob", "enrollment.course": "Mathematics" }));
        assert_eq!(rows[4], json!({ "student.name": null, "enrollment.course": "Biology" }));
    }

    #[tokio::test]
    async fn outer_join_rows_carry_main_fields_for_where() {
        let engine = QueryEngine::new(school());
        let rows = engine
            .execute_json(
                "SELECT student.name, enrollment.course FROM student LEFT JOIN enrollment ON student.id = enrollment.student_id WHERE student.age > 24",
            )
            .await
            .unwrap();

        assert_eq!(rows, json!([
            { "student.name": "John", "enrollment.course": "Mathematics" },
            { "student.name": "John", "enrollment.course": "Physics" },
            { "student.name": "Jane", "enrollment.course": "Chemistry" }
        ]));
    }

    #[tokio::test]
    async fn inner_join_rows_lack_unrequested_fields() {
        let engine = QueryEngine::new(school());
        let err = engine
            .execute_query("SELECT student.name FROM student INNER JOIN enrollment ON student.id = enrollment.student_id WHERE student.age > 24")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Error executing query: Invalid field: student.age");
    }

    #[tokio::test]
    async fn group_by_with_order() {
        let engine = QueryEngine::new(school());
        let rows = engine
            .execute_json("SELECT course, COUNT(*) FROM enrollment GROUP BY course ORDER BY course ASC")
            .await
            .unwrap();

        assert_eq!(rows, json!([
            { "course": "Biology",     "COUNT(*)": 1 },
            { "course": "Chemistry",   "COUNT(*)": 1 },
            { "course": "Mathematics", "COUNT(*)": 2 },
            { "course": "Physics",     "COUNT(*)": 1 }
        ]));

        let keys: Vec<&str> = rows[0].as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["course", "COUNT(*)"]);
    }

    #[tokio::test]
    async fn grouped_average_over_a_join() {
        let engine = QueryEngine::new(school());
        let rows = engine
            .execute_json(
                "SELECT enrollment.course, AVG(student.age) FROM student INNER JOIN enrollment ON student.id = enrollment.student_id GROUP BY enrollment.course LIMIT 2",
            )
            .await
            .unwrap();

        assert_eq!(rows, json!([
            { "enrollment.course": "Mathematics", "AVG(student.age)": 26 },
            { "enrollment.course": "Physics",     "AVG(student.age)": 30 }
        ]));
    }

    #[tokio::test]
    async fn whole_table_aggregates() {
        let engine = QueryEngine::new(school());
        let rows = engine
            .execute_json("SELECT SUM(age), AVG(age), MIN(age), MAX(age) FROM student")
            .await
            .unwrap();

        assert_eq!(rows, json!([{ "SUM(age)": 101, "AVG(age)": 25.25, "MIN(age)": 22, "MAX(age)": 30 }]));
    }

    #[tokio::test]
    async fn order_then_limit() {
        let engine = QueryEngine::new(school());
        let rows = engine.execute_json("SELECT name FROM student ORDER BY age DESC LIMIT 2;").await.unwrap();
        assert_eq!(rows, json!([{ "name": "John" }, { "name": "Jane" }]));

        let rows = engine.execute_json("SELECT name FROM student LIMIT 2").await.unwrap();
        assert_eq!(rows, json!([{ "name": "John" }, { "name": "Jane" }]));
    }

    #[tokio::test]
    async fn tables_are_not_changed_by_queries() {
        let engine = QueryEngine::new(school());
        let sql = "SELECT * FROM student WHERE age < 25 ORDER BY name ASC";
        let first = engine.execute_query(sql).await.unwrap();
        let second = engine.execute_query(sql).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(engine.source().list_tables(), vec!["enrollment", "student"]);
    }

    #[tokio::test]
    async fn failures_are_wrapped() {
        let engine = QueryEngine::new(school());

        let err = engine.execute_query("SELECT name FROM ghost").await.unwrap_err();
        assert_eq!(err.to_string(), "Error executing query: Table not found: ghost");

        let err = engine.execute_query("SELECT name FROM student WHERE age <> 3").await.unwrap_err();
        assert!(matches!(err.cause(), EngineError::UnsupportedOperator(op) if op == "<>"));

        let err = engine
            .execute_query("SELECT student.name FROM student FULL JOIN enrollment ON student.id = enrollment.student_id")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Error executing query: Unsupported JOIN type: FULL");

        let err = engine.execute_query("SELEC name FROM student").await.unwrap_err();
        assert!(matches!(err.cause(), EngineError::Syntax(_)));
        assert!(err.to_string().starts_with("Error executing query: SyntaxError:"));
    }

    #[tokio::test]
    async fn reads_csv_files_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("student.csv"), "id,name\n1,Bob\n2,Ann\n").unwrap();

        let engine = QueryEngine::new(CsvTableSource::new(Config::from(dir.path())));
        let rows = engine.execute_json("SELECT name FROM student ORDER BY name ASC").await.unwrap();
        assert_eq!(rows, json!([{ "name": "Ann" }, { "name": "Bob" }]));

        let err = engine.execute_query("SELECT name FROM missing").await.unwrap_err();
        assert!(matches!(err.cause(), EngineError::Storage(_)));
    }
}
