use anyhow::Result;
use bcast::{mutually_broadcast, mutually_expandable, Shape};
use bcast_backend_host::HostTensor;

fn main() -> Result<()> {
    let row = HostTensor::from_vec(Shape::new(vec![1, 3]), vec![1.0, 2.0, 3.0])?;
    let column = HostTensor::from_vec(Shape::new(vec![2, 1]), vec![10.0, 20.0])?;

    let combined = mutually_expandable(row.shape(), column.shape())
        .expect("a row and a column always share a broadcast shape");
    println!(
        "{} and {} broadcast to {}",
        row.shape(),
        column.shape(),
        combined
    );

    let (expanded_row, expanded_column) = mutually_broadcast(&row, &column)?;
    println!("expanded row:    {:?}", expanded_row.data());
    println!("expanded column: {:?}", expanded_column.data());

    // Incompatible shapes fail before anything is allocated.
    let square = HostTensor::zeros(Shape::new(vec![2, 3]));
    let other = HostTensor::zeros(Shape::new(vec![4, 2]));
    if let Err(err) = mutually_broadcast(&square, &other) {
        println!("as expected: {err}");
    }

    Ok(())
}
