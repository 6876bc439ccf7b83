// Copyright 2023 atframework
// Licensed under the MIT licenses.

extern crate criterion;
extern crate rand;
extern crate serbench_protocol;
extern crate serbench_utility_dev;

use criterion::criterion_main;


criterion_main! {
  codec::codec_default_shape,
  codec::codec_scaled_shape
}
