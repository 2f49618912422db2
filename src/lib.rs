pub mod apriori;
pub mod fp;
pub mod storage;
pub mod types;

pub use apriori::apriori_algorithm;
pub use fp::fp_growth_algorithm;
pub use storage::{FrequentLevel, ItemsetStorage};

#[cfg(feature = "python")]
mod python {
    use numpy::ndarray::{Array2, ArrayView2};
    use numpy::{IntoPyArray, PyArray2, PyReadonlyArray1, PyReadonlyArray2};
    use pyo3::exceptions::PyValueError;
    use pyo3::{Bound, PyResult, Python, pymodule, types::PyModule};

    use crate::storage::{FrequentLevel, add_to_levels};
    use crate::types::Transaction;

    // A transaction row is a one-hot encoding: the column index is the item id.
    fn decode_transactions(transactions: ArrayView2<i32>) -> Vec<Transaction> {
        transactions
            .outer_iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter_map(|(item, &flag)| (flag != 0).then_some(item))
                    .collect()
            })
            .collect()
    }

    fn levels_to_arrays<'py>(
        py: Python<'py>,
        levels: Vec<FrequentLevel>,
    ) -> PyResult<Vec<Bound<'py, PyArray2<usize>>>> {
        let mut result = Vec::new();

        for level in levels {
            if level.is_empty() {
                continue;
            }

            let itemset_size = level.itemset_size;
            let num_itemsets = level.len();
            let mut data = vec![0usize; num_itemsets * itemset_size];

            for (i, itemset) in level.iter_itemsets().enumerate() {
                for (j, &item) in itemset.iter().enumerate() {
                    data[i * itemset_size + j] = item;
                }
            }

            let array = Array2::from_shape_vec((num_itemsets, itemset_size), data)
                .map_err(|_| PyValueError::new_err("failed to shape result array"))?;

            result.push(array.into_pyarray(py));
        }

        Ok(result)
    }

    #[pymodule]
    fn freqmine<'py>(m: &Bound<'py, PyModule>) -> PyResult<()> {
        #[pyfn(m)]
        #[pyo3(name = "apriori")]
        fn apriori_py<'py>(
            py: Python<'py>,
            transactions: PyReadonlyArray2<'py, i32>,
            min_count: usize,
        ) -> PyResult<Vec<Bound<'py, PyArray2<usize>>>> {
            let transactions = decode_transactions(transactions.as_array());
            let levels = crate::apriori::apriori_algorithm(&transactions, min_count);
            levels_to_arrays(py, levels)
        }

        #[pyfn(m)]
        #[pyo3(name = "fp_growth", signature = (transactions, min_count, multiplicities=None))]
        fn fp_growth_py<'py>(
            py: Python<'py>,
            transactions: PyReadonlyArray2<'py, i32>,
            min_count: usize,
            multiplicities: Option<PyReadonlyArray1<'py, i64>>,
        ) -> PyResult<Vec<Bound<'py, PyArray2<usize>>>> {
            let transactions = decode_transactions(transactions.as_array());

            let multiplicities = multiplicities
                .map(|multiplicities| {
                    multiplicities
                        .as_array()
                        .iter()
                        .map(|&multiplicity| {
                            usize::try_from(multiplicity).map_err(|_| {
                                PyValueError::new_err("multiplicities must be non-negative")
                            })
                        })
                        .collect::<PyResult<Vec<usize>>>()
                })
                .transpose()?;

            let itemsets = crate::fp::fp_growth_algorithm(
                &transactions,
                multiplicities.as_deref(),
                min_count,
            )
            .map_err(PyValueError::new_err)?;

            let mut levels = Vec::new();
            for itemset in itemsets {
                add_to_levels(itemset, &mut levels);
            }

            levels_to_arrays(py, levels)
        }

        Ok(())
    }
}
