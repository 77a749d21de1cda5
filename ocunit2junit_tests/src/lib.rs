//! Log fixtures shared by the end-to-end tests.

pub const SINGLE_SUITE_LOG: &str = "\
Test Suite 'Foo' started at 2011-10-07 07:57:58 +0000
Test Case '-[Foo testA]' started.
Test Case '-[Foo testA]' passed (0.012 seconds).
Test Suite 'Foo' finished at 2011-10-07 07:57:58 +0000.
Executed 1 test, with 0 failures (0 unexpected) in 0.012 (0.014) seconds
";

pub const MULTI_SUITE_LOG: &str = "\
Test Suite 'Alpha' started at 2011-10-07 08:00:00 +0000
Test Case '-[Alpha testFails]' started.
/Users/ci/AlphaTests.m:21: error: -[Alpha testFails] : 'x<y' should be true
Test Case '-[Alpha testFails]' failed (0.1 seconds).
Test Case '-[Alpha testPasses]' started.
Test Case '-[Alpha testPasses]' passed (0.25 seconds).
Test Suite 'Alpha' finished at 2011-10-07 08:00:02 +0000.
Test Suite 'Beta' started at 2011-10-07 08:00:02 +0000
Test Case '-[Beta testZ]' started.
Test Case '-[Beta testZ]' passed (0.5 seconds).
Test Case '-[Beta testA]' started.
Test Case '-[Beta testA]' passed (0.25 seconds).
Test Suite 'Beta' passed at 2011-10-07 08:00:03 +0000.
";

pub const ABORTED_RUN_LOG: &str = "\
Test Suite 'Gamma' started at 2011-10-07 09:00:00 +0000
Test Case '-[Gamma testHangs]' started.
Segmentation fault: 11
";

pub const BUILD_FAILED_LOG: &str = "\
CompileC build/Foo.o Foo.m normal i386 objective-c
** BUILD FAILED **
The following build commands failed:
\tCompileC build/Foo.o Foo.m normal i386 objective-c
";
