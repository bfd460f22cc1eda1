use crate::infra::{calculator_service, parse_amount};
use clap::Args;
use fizzy::calculators::{MortgageResult, PaymentRequest, ReadinessRequest, ReadinessResult};
use fizzy::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct PaymentArgs {
    /// Purchase price of the home
    #[arg(long, value_parser = parse_amount)]
    pub(crate) home_price: f64,
    /// Cash put down at closing
    #[arg(long, value_parser = parse_amount)]
    pub(crate) down_payment: f64,
    /// Annual interest rate as a percentage (e.g. 6.5)
    #[arg(long, value_parser = parse_amount)]
    pub(crate) interest_rate: f64,
    /// Loan term in years (defaults to 30)
    #[arg(long)]
    pub(crate) loan_term: Option<u32>,
    /// Monthly property tax; estimated from the price when omitted
    #[arg(long, value_parser = parse_amount)]
    pub(crate) property_tax: Option<f64>,
    /// Monthly homeowners insurance; estimated from the price when omitted
    #[arg(long, value_parser = parse_amount)]
    pub(crate) home_insurance: Option<f64>,
    /// Monthly private mortgage insurance; estimated below 20% down when omitted
    #[arg(long, value_parser = parse_amount)]
    pub(crate) pmi: Option<f64>,
    /// Monthly HOA dues
    #[arg(long, value_parser = parse_amount)]
    pub(crate) hoa: Option<f64>,
    /// Print the raw JSON response instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReadinessArgs {
    /// Credit score (300-850)
    #[arg(long)]
    pub(crate) credit_score: u16,
    /// Gross monthly income
    #[arg(long, value_parser = parse_amount)]
    pub(crate) monthly_income: f64,
    /// Total monthly debt payments
    #[arg(long, value_parser = parse_amount)]
    pub(crate) monthly_debt: Option<f64>,
    /// Savings set aside for a down payment
    #[arg(long, value_parser = parse_amount)]
    pub(crate) down_payment_savings: Option<f64>,
    /// Amount saved each month
    #[arg(long, value_parser = parse_amount)]
    pub(crate) monthly_savings: Option<f64>,
    /// Years with the current employer or in the current field
    #[arg(long)]
    pub(crate) employment_years: Option<f64>,
    /// Applicant has a prior bankruptcy
    #[arg(long)]
    pub(crate) has_prior_bankruptcy: bool,
    /// Applicant has a prior foreclosure
    #[arg(long)]
    pub(crate) has_foreclosure: bool,
    /// Print the raw JSON response instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the mortgage payment portion of the demo.
    #[arg(long)]
    pub(crate) skip_payment: bool,
    /// Skip the readiness scoring portion of the demo.
    #[arg(long)]
    pub(crate) skip_readiness: bool,
}

impl From<PaymentArgs> for PaymentRequest {
    fn from(args: PaymentArgs) -> Self {
        PaymentRequest {
            home_price: Some(args.home_price),
            down_payment: Some(args.down_payment),
            interest_rate: Some(args.interest_rate),
            loan_term: args.loan_term,
            property_tax: args.property_tax,
            home_insurance: args.home_insurance,
            pmi: args.pmi,
            hoa: args.hoa,
        }
    }
}

impl From<ReadinessArgs> for ReadinessRequest {
    fn from(args: ReadinessArgs) -> Self {
        ReadinessRequest {
            credit_score: Some(args.credit_score),
            monthly_income: Some(args.monthly_income),
            monthly_debt: args.monthly_debt,
            down_payment_savings: args.down_payment_savings,
            monthly_savings: args.monthly_savings,
            employment_years: args.employment_years,
            has_prior_bankruptcy: args.has_prior_bankruptcy,
            has_foreclosure: args.has_foreclosure,
        }
    }
}

pub(crate) fn run_payment(args: PaymentArgs) -> Result<(), AppError> {
    let json = args.json;
    let service = calculator_service();
    let result = service.calculate_payment(args.into())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_payment(&result);
    }
    Ok(())
}

pub(crate) fn run_readiness(args: ReadinessArgs) -> Result<(), AppError> {
    let json = args.json;
    let service = calculator_service();
    let result = service.calculate_readiness(args.into())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_readiness(&result);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = calculator_service();
    println!("Fizzy calculator demo");

    if !args.skip_payment {
        for (label, request) in sample_purchases() {
            println!("\n{label}");
            render_payment(&service.calculate_payment(request)?);
        }
    }

    if !args.skip_readiness {
        for (label, request) in sample_buyers() {
            println!("\n{label}");
            render_readiness(&service.calculate_readiness(request)?);
        }
    }

    Ok(())
}

fn sample_purchases() -> Vec<(&'static str, PaymentRequest)> {
    vec![
        (
            "$250,000 home, 20% down, 6% fixed for 30 years",
            PaymentRequest {
                home_price: Some(250_000.0),
                down_payment: Some(50_000.0),
                interest_rate: Some(6.0),
                ..PaymentRequest::default()
            },
        ),
        (
            "$200,000 home, 3.5% FHA down payment, 6.5% fixed for 30 years",
            PaymentRequest {
                home_price: Some(200_000.0),
                down_payment: Some(7_000.0),
                interest_rate: Some(6.5),
                ..PaymentRequest::default()
            },
        ),
    ]
}

fn sample_buyers() -> Vec<(&'static str, ReadinessRequest)> {
    vec![
        (
            "Established buyer with strong credit and 20%+ saved",
            ReadinessRequest {
                credit_score: Some(760),
                monthly_income: Some(6_000.0),
                monthly_debt: Some(1_200.0),
                down_payment_savings: Some(60_000.0),
                monthly_savings: Some(1_500.0),
                employment_years: Some(5.0),
                ..ReadinessRequest::default()
            },
        ),
        (
            "First-time buyer rebuilding after a bankruptcy",
            ReadinessRequest {
                credit_score: Some(600),
                monthly_income: Some(5_000.0),
                monthly_debt: Some(1_000.0),
                down_payment_savings: Some(20_000.0),
                monthly_savings: Some(500.0),
                employment_years: Some(3.0),
                has_prior_bankruptcy: true,
                ..ReadinessRequest::default()
            },
        ),
        (
            "Stretched budget with a new job",
            ReadinessRequest {
                credit_score: Some(650),
                monthly_income: Some(4_000.0),
                monthly_debt: Some(2_000.0),
                down_payment_savings: Some(5_000.0),
                monthly_savings: Some(100.0),
                employment_years: Some(0.75),
                ..ReadinessRequest::default()
            },
        ),
    ]
}

pub(crate) fn render_payment(result: &MortgageResult) {
    println!("Loan amount: ${:.2}", result.total_loan_amount);
    println!("Monthly payment: ${:.2}", result.total_monthly_payment);
    println!("- Principal & interest: ${:.2}", result.monthly_principal_interest);
    println!("- Property tax: ${:.2}", result.monthly_property_tax);
    println!("- Home insurance: ${:.2}", result.monthly_home_insurance);
    println!("- PMI: ${:.2}", result.monthly_pmi);
    println!("- HOA: ${:.2}", result.monthly_hoa);

    let breakdown = &result.breakdown;
    println!(
        "Over the life of the loan: ${:.0} principal | ${:.0} interest | ${:.0} taxes & insurance | ${:.0} other",
        breakdown.principal, breakdown.interest, breakdown.taxes_insurance, breakdown.other
    );
}

pub(crate) fn render_readiness(result: &ReadinessResult) {
    println!(
        "Readiness score: {}/100 ({})",
        result.overall_score,
        result.readiness_level.label()
    );

    let breakdown = &result.breakdown;
    println!(
        "- Credit {} | DTI {} | Down payment {} | Savings rate {} | Employment {}",
        breakdown.credit_score,
        breakdown.debt_to_income,
        breakdown.down_payment,
        breakdown.savings_rate,
        breakdown.employment
    );

    println!("Recommendations");
    for advice in &result.recommendations {
        println!("- {advice}");
    }

    println!("Loan programs to explore");
    for program in &result.loan_types {
        println!("- {program}");
    }
}
