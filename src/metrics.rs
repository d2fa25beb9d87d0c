use arrow::array::{BooleanArray, Float64Array, Int64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_writer::ArrowWriter;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

/// One trial of an experiment, as seen by the worker that ran it.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialRecord {
    pub worker: usize,
    /// Trial number within the worker's stream.
    pub trial: usize,
    pub drawn: usize,
    pub success: bool,
    /// Successes so far within the worker's stream.
    pub successes: usize,
    /// Running success fraction within the worker's stream.
    pub estimate: f64,
}

/// Writes trial records to a parquet file.
///
/// Instrumentation only: called by the command line when asked to, never by
/// the hat or the experiment.
pub fn serialize_to_parquet(
    trial_data: &[TrialRecord],
    filename: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let workers: Int64Array = trial_data.iter().map(|d| d.worker as i64).collect();
    let trials: Int64Array = trial_data.iter().map(|d| d.trial as i64).collect();
    let drawn: Int64Array = trial_data.iter().map(|d| d.drawn as i64).collect();
    let success_flags: BooleanArray = trial_data.iter().map(|d| Some(d.success)).collect();
    let successes: Int64Array = trial_data.iter().map(|d| d.successes as i64).collect();
    let estimates: Float64Array = trial_data.iter().map(|d| d.estimate).collect();

    // Arrow schema
    let schema = Schema::new(vec![
        Field::new("worker", DataType::Int64, false),
        Field::new("trial", DataType::Int64, false),
        Field::new("drawn", DataType::Int64, false),
        Field::new("success", DataType::Boolean, false),
        Field::new("successes", DataType::Int64, false),
        Field::new("estimate", DataType::Float64, false),
    ]);

    let batch = RecordBatch::try_new(
        Arc::new(schema),
        vec![
            Arc::new(workers),
            Arc::new(trials),
            Arc::new(drawn),
            Arc::new(success_flags),
            Arc::new(successes),
            Arc::new(estimates),
        ],
    )?;

    let file = File::create(filename)?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(&batch)?;
    writer.close()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parquet::file::reader::{FileReader, SerializedFileReader};

    #[test]
    fn test_parquet_row_count() {
        let records: Vec<TrialRecord> = (0..10)
            .map(|trial| TrialRecord {
                worker: 0,
                trial,
                drawn: 5,
                success: trial % 2 == 0,
                successes: trial / 2 + 1,
                estimate: (trial / 2 + 1) as f64 / (trial + 1) as f64,
            })
            .collect();

        let path = std::env::temp_dir().join(format!("hatdraw_metrics_{}.parquet", std::process::id()));
        serialize_to_parquet(&records, &path).unwrap();

        let reader = SerializedFileReader::new(File::open(&path).unwrap()).unwrap();
        assert_eq!(reader.metadata().file_metadata().num_rows(), 10);

        std::fs::remove_file(&path).unwrap();
    }
}
