use crate::model::{Columns, CommitCounts, WeekColumn};

/// Group day buckets into week columns.
///
/// Keys are walked in ascending order. A bucket at day 0 of its week starts a
/// fresh column, every bucket is appended, and the column is sealed when day 6
/// is reached. A trailing week that never gets to day 6 is left out.
pub fn build(counts: &CommitCounts) -> Columns {
    let (columns, _) = counts.iter().fold(
        (Columns::new(), WeekColumn::new()),
        |(mut columns, mut column), (bucket, count)| {
            let week = bucket / 7;
            let day_in_week = bucket % 7;

            if day_in_week == 0 {
                column = WeekColumn::new();
            }
            column.push(count);
            if day_in_week == 6 {
                columns.seal(week, column.clone());
            }

            (columns, column)
        },
    );
    columns
}
