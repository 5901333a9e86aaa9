#[cfg(test)]
#[path = "mapframe_test.rs"]
mod tests;

// Column layout of mapframe CSVs: index 1 holds the timestamp in seconds,
// index 3 the frame index. The header row and blank lines are excluded.
const TIMESTAMP_COLUMN: usize = 1;
const FRAME_INDEX_COLUMN: usize = 3;

pub fn parse(text: &str) -> Vec<Vec<String>> {
    return text
        .lines()
        .filter(|line| {
            return !line.trim().is_empty();
        })
        .skip(1)
        .map(|line| {
            return line
                .split(',')
                .map(|cell| {
                    return cell.trim().to_string();
                })
                .collect();
        })
        .collect();
}

pub fn timestamp_for_frame(rows: &[Vec<String>], frame_index: u64) -> Option<f64> {
    let row = rows.iter().find(|row| {
        return row
            .get(FRAME_INDEX_COLUMN)
            .and_then(|cell| {
                return cell.parse::<u64>().ok();
            })
            == Some(frame_index);
    })?;

    return row.get(TIMESTAMP_COLUMN)?.parse::<f64>().ok();
}
